//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy::primitives::Address;

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error in the network / account configuration
    Config(String),
    /// Error when building output file
    JsonOutputError(String),
    /// Error when creating the client
    ClientInitialization(String),
    /// Error loading a compiled contract artifact
    Artifact(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error compiling a contract
    ContractCompilation(String),
    /// The DAO deployment failed after the marketplace was already deployed
    PartialDeployment {
        /// Address of the marketplace left on chain
        marketplace: Address,
        /// Why the DAO stage failed
        reason: String,
    },
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Config(s) => write!(f, "invalid configuration: {}", s),
            ScriptError::JsonOutputError(s) => write!(f, "error writing json output: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error during client init: {}", s),
            ScriptError::Artifact(s) => write!(f, "error loading contract artifact: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractCompilation(s) => write!(f, "error compiling contract: {}", s),
            ScriptError::PartialDeployment {
                marketplace,
                reason,
            } => write!(
                f,
                "DAO deployment failed, marketplace remains deployed at {}: {}",
                marketplace, reason
            ),
        }
    }
}

impl Error for ScriptError {}
