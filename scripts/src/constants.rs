//! Constants used in the deploy scripts

/// Compiler version every contract is built with
pub const SOLC_VERSION: &str = "0.8.4";

/// Network targeted when none is given
pub const DEFAULT_NETWORK: &str = "goerli";

/// Name of the goerli test network
pub const GOERLI_NETWORK: &str = "goerli";

/// Chain id of goerli
pub const GOERLI_CHAIN_ID: u64 = 5;

/// Name of the local development network
pub const LOCALHOST_NETWORK: &str = "localhost";

/// Default RPC endpoint of a local dev node
pub const LOCALHOST_RPC: &str = "http://127.0.0.1:8545";

/// Chain id used by local dev nodes (anvil / hardhat)
pub const LOCALHOST_CHAIN_ID: u64 = 31337;

/// Env var holding the goerli RPC endpoint
pub const RPC_URL_ENV: &str = "QUICKNODE_HTTP_URL";

/// Env var holding the deployer private key
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Env var holding the address of the already deployed CryptoDevs NFT collection
pub const NFT_CONTRACT_ENV: &str = "CRYPTODEVS_NFT_CONTRACT_ADDRESS";

/// Artifact name of the marketplace contract
pub const MARKETPLACE_CONTRACT: &str = "FakeNFTMarketplace";

/// Artifact name of the DAO contract
pub const DAO_CONTRACT: &str = "CryptoDevsDAO";

/// Amount of ether sent to the DAO at construction
pub const DAO_FUNDING_ETHER: &str = "0.1";

/// Default location of the solidity sources
pub const DEFAULT_CONTRACTS_DIR: &str = "contracts";

/// Default location of the compiled artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Where npm installs the imported solidity libraries
pub const DEFAULT_LIBRARIES_DIR: &str = "node_modules";

/// File in which the deployed addresses are recorded
pub const DEFAULT_OUTPUT_FILE: &str = "deployed.json";

/// Output key of the marketplace deployment
pub const MARKETPLACE_OUTPUT_KEY: &str = "marketplace";

/// Output key of the DAO deployment
pub const DAO_OUTPUT_KEY: &str = "dao";
