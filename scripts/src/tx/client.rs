//! RPC provider setup

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::{utils::format_ether, Address},
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::{Client, Http},
};
use tracing::info;

use crate::{config::NetworkConfig, errors::ScriptError};

/// Sets up an HTTP provider signing with the first account of the network.
///
/// Returns the provider along with the deployer address.
pub async fn create_rpc_provider(
    network: &NetworkConfig,
) -> Result<(impl Provider<Http<Client>, Ethereum> + Clone, Address), ScriptError> {
    // Create our signer
    let signer = network
        .deployer_key()?
        .parse::<PrivateKeySigner>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let deployer = signer.address();

    let wallet = EthereumWallet::from(signer);

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(network.rpc_url()?);

    // Fetch chain id
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    if let Some(expected) = network.chain_id {
        if chain_id != expected {
            return Err(ScriptError::ClientInitialization(format!(
                "{} expects chain id {} but the endpoint reports {}",
                network.name, expected, chain_id
            )));
        }
    }

    info!("Build client on chain ID: {}", chain_id);

    let balance = provider
        .get_balance(deployer)
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!("Deployer {} holds {} ETH", deployer, format_ether(balance));

    Ok((provider, deployer))
}
