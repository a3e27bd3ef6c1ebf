//! Contract factories and the deployment sequence

use alloy::{
    primitives::{Address, Bytes, TxHash, U256},
    sol_types::SolValue,
};

use crate::{artifacts::ContractArtifact, errors::ScriptError};

mod orchestrator;

pub use orchestrator::{run, DaoDeployment, DeploymentInputs};

/// A contract creation to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    /// Name of the contract being created
    pub contract: String,
    /// Creation bytecode, without the constructor args
    pub bytecode: Bytes,
    /// Constructor args, in declaration order
    pub constructor_args: Vec<Address>,
    /// Native currency sent along with the creation
    pub value: U256,
}

impl DeployRequest {
    /// Creation code followed by the encoded constructor args
    pub fn deploy_code(&self) -> Bytes {
        let mut code = self.bytecode.to_vec();
        code.extend(encode_constructor_args(&self.constructor_args));
        code.into()
    }
}

/// A confirmed contract creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    /// Name of the created contract
    pub contract: String,
    /// Address it lives at
    pub address: Address,
    /// Hash of the creation transaction
    pub tx_hash: TxHash,
    /// Block the creation was included in
    pub block_number: Option<u64>,
}

/// Something able to create contracts on a network.
///
/// `deploy` only resolves once the creation is confirmed.
#[allow(async_fn_in_trait)]
pub trait ContractDeployer {
    /// Submit the creation and wait for its receipt
    async fn deploy(&self, request: DeployRequest) -> Result<DeployedContract, ScriptError>;
}

/// Produces new instances of a compiled contract
#[derive(Debug, Clone)]
pub struct ContractFactory {
    /// Compiled contract every instance is created from
    artifact: ContractArtifact,
}

impl ContractFactory {
    /// Factory of the given compiled contract
    pub fn new(artifact: ContractArtifact) -> Self {
        Self { artifact }
    }

    /// Build the creation request for the given constructor args and value
    pub fn request(&self, constructor_args: Vec<Address>, value: U256) -> DeployRequest {
        DeployRequest {
            contract: self.artifact.name.clone(),
            bytecode: self.artifact.bytecode.clone(),
            constructor_args,
            value,
        }
    }

    /// Deploy a new instance and wait for its confirmation
    pub async fn deploy<D: ContractDeployer>(
        &self,
        deployer: &D,
        constructor_args: Vec<Address>,
        value: U256,
    ) -> Result<DeployedContract, ScriptError> {
        deployer.deploy(self.request(constructor_args, value)).await
    }
}

/// ABI encode address constructor params, one word each
pub fn encode_constructor_args(args: &[Address]) -> Vec<u8> {
    args.iter().flat_map(|arg| arg.abi_encode()).collect()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, bytes};

    use super::*;

    #[test]
    fn args_are_left_padded_words() {
        let marketplace = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
        let nft = address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512");

        let encoded = encode_constructor_args(&[marketplace, nft]);

        assert_eq!(encoded.len(), 64);
        assert_eq!(&encoded[..12], &[0u8; 12]);
        assert_eq!(&encoded[12..32], marketplace.as_slice());
        assert_eq!(&encoded[44..64], nft.as_slice());
        assert_eq!(encoded, (marketplace, nft).abi_encode_params());
    }

    #[test]
    fn deploy_code_appends_args_to_bytecode() {
        let factory = ContractFactory::new(ContractArtifact {
            name: "CryptoDevsDAO".to_string(),
            bytecode: bytes!("6080"),
        });
        let marketplace = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

        let request = factory.request(vec![marketplace], U256::from(1));

        assert_eq!(request.contract, "CryptoDevsDAO");
        let code = request.deploy_code();
        assert_eq!(&code[..2], &[0x60, 0x80]);
        assert_eq!(&code[2..], marketplace.abi_encode().as_slice());
    }

    #[test]
    fn no_args_keeps_bytecode_untouched() {
        let factory = ContractFactory::new(ContractArtifact {
            name: "FakeNFTMarketplace".to_string(),
            bytecode: bytes!("6080604052"),
        });

        assert_eq!(
            factory.request(vec![], U256::ZERO).deploy_code(),
            bytes!("6080604052")
        );
    }
}
