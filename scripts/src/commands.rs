//! Implementations of the CLI commands

use std::path::{Path, PathBuf};

use alloy::primitives::{utils::parse_ether, U256};
use tracing::info;

use crate::{
    artifacts::ArtifactStore,
    build::SolcBuilder,
    cli::{BuildArgs, DeployArgs},
    config::HarnessConfig,
    constants::{
        DAO_CONTRACT, DAO_FUNDING_ETHER, DAO_OUTPUT_KEY, MARKETPLACE_CONTRACT,
        MARKETPLACE_OUTPUT_KEY,
    },
    deploy::{run, ContractDeployer, DaoDeployment, DeployedContract, DeploymentInputs},
    errors::ScriptError,
    output_writer::{write_output_file, OutputKeys},
    tx::{client::create_rpc_provider, deployer::RpcDeployer},
};

/// Compile the contracts with the pinned solc
pub fn build_contracts(
    args: &BuildArgs,
    config: &HarnessConfig,
) -> Result<Vec<PathBuf>, ScriptError> {
    let mut builder = SolcBuilder::new(&args.contracts, &args.artifacts, &config.solidity);
    builder.solc = args.solc.clone();
    builder.libraries_dir = args.libraries.clone();

    builder.build()
}

/// Deploy the CryptoDevs marketplace and DAO on the given network
pub async fn deploy_contracts(
    args: DeployArgs,
    config: &HarnessConfig,
    network: &str,
) -> Result<DaoDeployment, ScriptError> {
    let network = config.network(network)?;

    if args.compile {
        info!("Building contracts...");
        build_contracts(&args.build, config)?;
    }

    // Build our RPC client with signer
    let (provider, deployer) = create_rpc_provider(network).await?;
    info!("Deploying to {} from {}", network.name, deployer);

    let inputs = DeploymentInputs {
        nft_contract: args.nft_contract,
        dao_funding: dao_funding()?,
    };
    let artifacts = ArtifactStore::new(&args.build.artifacts);

    deploy_and_record(
        &RpcDeployer::new(provider, deployer),
        &artifacts,
        inputs,
        &args.output,
    )
    .await
}

/// Run the deployment, then report and record every confirmed contract
pub async fn deploy_and_record<D: ContractDeployer>(
    deployer: &D,
    artifacts: &ArtifactStore,
    inputs: DeploymentInputs,
    output: &Path,
) -> Result<DaoDeployment, ScriptError> {
    match run(deployer, artifacts, inputs).await {
        Ok(deployment) => {
            println!(
                "{} deployed to: {}",
                MARKETPLACE_CONTRACT, deployment.marketplace.address
            );
            println!("{} deployed to: {}", DAO_CONTRACT, deployment.dao.address);

            record_deployment(output, MARKETPLACE_OUTPUT_KEY, &deployment.marketplace)?;
            record_deployment(output, DAO_OUTPUT_KEY, &deployment.dao)?;

            Ok(deployment)
        }
        // The marketplace is on chain regardless, keep track of it
        Err(ScriptError::PartialDeployment {
            marketplace,
            reason,
        }) => {
            println!("{} deployed to: {}", MARKETPLACE_CONTRACT, marketplace);
            write_output_file(
                output,
                OutputKeys::Deployment {
                    key: MARKETPLACE_OUTPUT_KEY,
                },
                marketplace,
            )?;

            Err(ScriptError::PartialDeployment {
                marketplace,
                reason,
            })
        }
        Err(e) => Err(e),
    }
}

/// The fixed amount sent to the DAO at construction
pub fn dao_funding() -> Result<U256, ScriptError> {
    parse_ether(DAO_FUNDING_ETHER).map_err(|e| ScriptError::Config(e.to_string()))
}

/// Write the address and creation tx of a contract to the output file
fn record_deployment(
    output: &Path,
    key: &'static str,
    contract: &DeployedContract,
) -> Result<(), ScriptError> {
    write_output_file(output, OutputKeys::Deployment { key }, contract.address)?;
    write_output_file(
        output,
        OutputKeys::Tx {
            key,
            tx_key: String::from("deploy"),
        },
        contract.tx_hash,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dao_is_funded_with_a_tenth_of_an_ether() {
        assert_eq!(
            dao_funding().unwrap(),
            U256::from(100_000_000_000_000_000u64)
        );
    }
}
