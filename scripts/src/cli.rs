//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use alloy::primitives::Address;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{build_contracts, deploy_contracts},
    config::HarnessConfig,
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONTRACTS_DIR, DEFAULT_LIBRARIES_DIR, DEFAULT_NETWORK, DEFAULT_OUTPUT_FILE,
        NFT_CONTRACT_ENV, PRIVATE_KEY_ENV, RPC_URL_ENV,
    },
    errors::ScriptError,
};

/// Scripts for compiling & deploying the CryptoDevs DAO contracts
#[derive(Parser)]
pub struct Cli {
    /// Network to deploy to
    #[arg(short, long, default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// RPC URL of the goerli network
    #[arg(long, env = RPC_URL_ENV)]
    pub goerli_url: Option<String>,

    /// RPC URL overriding the one of the selected network
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Private key of the deployer
    #[arg(short, long, env = PRIVATE_KEY_ENV, hide_env_values = true)]
    pub priv_key: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Build the network configuration out of the parsed args
    pub fn harness_config(&self) -> Result<HarnessConfig, ScriptError> {
        let mut config = HarnessConfig::new(self.goerli_url.clone(), self.priv_key.clone());
        if let Some(rpc_url) = &self.rpc_url {
            config.override_rpc_url(&self.network, rpc_url.clone())?;
        }

        Ok(config)
    }
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Compile the contracts into artifacts
    Build(BuildArgs),
    /// Deploy the marketplace then the DAO
    Deploy(DeployArgs),
}

impl Command {
    /// Run the command
    pub async fn run(self, config: &HarnessConfig, network: &str) -> Result<(), ScriptError> {
        match self {
            Command::Build(args) => {
                info!("Building contracts...");
                let written = build_contracts(&args, config)?;
                info!("Built {} artifacts with success", written.len());

                Ok(())
            }
            Command::Deploy(args) => {
                info!("Deploying contracts...");
                deploy_contracts(args, config, network).await?;
                info!("Deployed with success");

                Ok(())
            }
        }
    }
}

/// Compile the contracts
#[derive(Args)]
pub struct BuildArgs {
    /// Directory of the solidity sources, searched recursively
    #[arg(long, default_value = DEFAULT_CONTRACTS_DIR)]
    pub contracts: PathBuf,
    /// Package directory that package imports such as `@openzeppelin/...` resolve into
    #[arg(long, default_value = DEFAULT_LIBRARIES_DIR)]
    pub libraries: PathBuf,
    /// Directory the artifacts are written to and read from
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,
    /// solc binary to compile with
    #[arg(long, default_value = "solc")]
    pub solc: PathBuf,
}

/// Deploy the contracts
#[derive(Args)]
pub struct DeployArgs {
    /// Address of the already deployed CryptoDevs NFT collection
    #[arg(long, env = NFT_CONTRACT_ENV)]
    pub nft_contract: Address,
    /// Compile the contracts before deploying
    #[arg(long)]
    pub compile: bool,
    /// File recording the deployed addresses
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
    /// Where the sources and artifacts live
    #[command(flatten)]
    pub build: BuildArgs,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn deploy_defaults() {
        let cli = Cli::try_parse_from([
            "cryptodevs-scripts",
            "deploy",
            "--nft-contract",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
        ])
        .unwrap();

        assert_eq!(cli.network, "goerli");
        let Command::Deploy(args) = cli.command else {
            panic!("expected the deploy command");
        };
        assert!(!args.compile);
        assert_eq!(args.output, PathBuf::from("deployed.json"));
        assert_eq!(args.build.artifacts, PathBuf::from("artifacts"));
    }

    #[test]
    fn rpc_url_flag_targets_the_selected_network() {
        let cli = Cli::try_parse_from([
            "cryptodevs-scripts",
            "--network",
            "localhost",
            "--goerli-url",
            "https://goerli.quiknode.example/",
            "--rpc-url",
            "http://127.0.0.1:9545",
            "build",
        ])
        .unwrap();

        let config = cli.harness_config().unwrap();
        assert_eq!(
            config.network("localhost").unwrap().url.as_deref(),
            Some("http://127.0.0.1:9545")
        );
        assert_eq!(
            config.network("goerli").unwrap().url.as_deref(),
            Some("https://goerli.quiknode.example/")
        );
    }

    #[test]
    fn rejects_a_malformed_nft_address() {
        assert!(Cli::try_parse_from([
            "cryptodevs-scripts",
            "deploy",
            "--nft-contract",
            "0x1234",
        ])
        .is_err());
    }
}
