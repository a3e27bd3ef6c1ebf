//! The marketplace then DAO deployment sequence

use alloy::primitives::{Address, U256};
use tracing::{info, warn};

use crate::{
    artifacts::ArtifactStore,
    constants::{DAO_CONTRACT, MARKETPLACE_CONTRACT},
    deploy::{ContractDeployer, ContractFactory, DeployedContract},
    errors::ScriptError,
};

/// Values the DAO is constructed with besides the marketplace
#[derive(Debug, Clone, Copy)]
pub struct DeploymentInputs {
    /// The already deployed CryptoDevs NFT collection
    pub nft_contract: Address,
    /// Native currency sent to the DAO at construction
    pub dao_funding: U256,
}

/// Both contracts, once confirmed
#[derive(Debug, Clone)]
pub struct DaoDeployment {
    /// The FakeNFTMarketplace instance
    pub marketplace: DeployedContract,
    /// The CryptoDevsDAO instance, built on the marketplace
    pub dao: DeployedContract,
}

/// Deploy the marketplace, then the DAO pointing at it.
///
/// Nothing is retried. If the DAO stage fails the marketplace stays on chain and its address
/// is carried by [`ScriptError::PartialDeployment`].
pub async fn run<D: ContractDeployer>(
    deployer: &D,
    artifacts: &ArtifactStore,
    inputs: DeploymentInputs,
) -> Result<DaoDeployment, ScriptError> {
    info!("Deploying {}...", MARKETPLACE_CONTRACT);
    let marketplace_factory = ContractFactory::new(artifacts.load(MARKETPLACE_CONTRACT)?);
    let marketplace = marketplace_factory
        .deploy(deployer, vec![], U256::ZERO)
        .await?;
    info!(
        "{} confirmed at {} (tx {})",
        MARKETPLACE_CONTRACT, marketplace.address, marketplace.tx_hash
    );

    info!("Deploying {}...", DAO_CONTRACT);
    let dao = deploy_dao(deployer, artifacts, marketplace.address, inputs)
        .await
        .map_err(|e| {
            warn!(
                "{} failed, {} is left deployed at {}",
                DAO_CONTRACT, MARKETPLACE_CONTRACT, marketplace.address
            );
            ScriptError::PartialDeployment {
                marketplace: marketplace.address,
                reason: e.to_string(),
            }
        })?;
    info!("{} confirmed at {} (tx {})", DAO_CONTRACT, dao.address, dao.tx_hash);

    Ok(DaoDeployment { marketplace, dao })
}

/// DAO constructor takes `(marketplace, nftContract)` and is funded at creation
async fn deploy_dao<D: ContractDeployer>(
    deployer: &D,
    artifacts: &ArtifactStore,
    marketplace: Address,
    inputs: DeploymentInputs,
) -> Result<DeployedContract, ScriptError> {
    let dao_factory = ContractFactory::new(artifacts.load(DAO_CONTRACT)?);
    dao_factory
        .deploy(
            deployer,
            vec![marketplace, inputs.nft_contract],
            inputs.dao_funding,
        )
        .await
}
