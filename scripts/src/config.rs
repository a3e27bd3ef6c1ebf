//! Network and compiler configuration of the deploy scripts

use std::collections::BTreeMap;

use reqwest::Url;

use crate::{
    constants::{
        GOERLI_CHAIN_ID, GOERLI_NETWORK, LOCALHOST_CHAIN_ID, LOCALHOST_NETWORK, LOCALHOST_RPC,
        PRIVATE_KEY_ENV, RPC_URL_ENV, SOLC_VERSION,
    },
    errors::ScriptError,
};

/// A network the contracts can be deployed to.
///
/// No `Debug` impl, the accounts are raw private keys.
#[derive(Clone)]
pub struct NetworkConfig {
    /// Name the network is selected by
    pub name: String,
    /// RPC endpoint
    pub url: Option<String>,
    /// Chain id the endpoint must report, if known
    pub chain_id: Option<u64>,
    /// Private keys of the accounts, the first one deploys
    pub accounts: Vec<String>,
}

impl NetworkConfig {
    /// Parse the RPC endpoint of this network
    pub fn rpc_url(&self) -> Result<Url, ScriptError> {
        let url = self.url.as_deref().ok_or_else(|| {
            ScriptError::Config(format!(
                "no RPC url for network {}, set {} or pass --rpc-url",
                self.name, RPC_URL_ENV
            ))
        })?;

        url.parse::<Url>()
            .map_err(|e| ScriptError::Config(format!("invalid RPC url for {}: {}", self.name, e)))
    }

    /// Private key of the account signing the deployments
    pub fn deployer_key(&self) -> Result<&str, ScriptError> {
        self.accounts
            .first()
            .map(String::as_str)
            .ok_or_else(|| {
                ScriptError::Config(format!(
                    "no account for network {}, set {} or pass --priv-key",
                    self.name, PRIVATE_KEY_ENV
                ))
            })
    }
}

/// Whole configuration: the compiler pin and the known networks
#[derive(Clone)]
pub struct HarnessConfig {
    /// Solidity compiler version
    pub solidity: String,
    /// Networks by name
    pub networks: BTreeMap<String, NetworkConfig>,
}

impl HarnessConfig {
    /// Build the default configuration, wiring the goerli endpoint and the key into the networks.
    ///
    /// `localhost` always starts on the dev node url, only [`Self::override_rpc_url`] moves it.
    pub fn new(goerli_url: Option<String>, priv_key: Option<String>) -> Self {
        let accounts: Vec<String> = priv_key.into_iter().collect();

        let goerli = NetworkConfig {
            name: GOERLI_NETWORK.to_string(),
            url: goerli_url,
            chain_id: Some(GOERLI_CHAIN_ID),
            accounts: accounts.clone(),
        };
        let localhost = NetworkConfig {
            name: LOCALHOST_NETWORK.to_string(),
            url: Some(LOCALHOST_RPC.to_string()),
            chain_id: Some(LOCALHOST_CHAIN_ID),
            accounts,
        };

        let networks = [goerli, localhost]
            .into_iter()
            .map(|network| (network.name.clone(), network))
            .collect();

        Self {
            solidity: SOLC_VERSION.to_string(),
            networks,
        }
    }

    /// Point a single network at another endpoint
    pub fn override_rpc_url(&mut self, name: &str, url: String) -> Result<(), ScriptError> {
        self.network(name)?;
        if let Some(network) = self.networks.get_mut(name) {
            network.url = Some(url);
        }

        Ok(())
    }

    /// Find a network by name
    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ScriptError> {
        self.networks.get(name).ok_or_else(|| {
            let known: Vec<&str> = self.networks.keys().map(String::as_str).collect();
            ScriptError::Config(format!(
                "unknown network {}, expected one of: {}",
                name,
                known.join(", ")
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goerli_is_wired_to_the_given_endpoint_and_key() {
        let config = HarnessConfig::new(
            Some("https://goerli.example/rpc".to_string()),
            Some("0x01".to_string()),
        );

        let goerli = config.network("goerli").unwrap();
        assert_eq!(goerli.chain_id, Some(5));
        assert_eq!(goerli.rpc_url().unwrap().as_str(), "https://goerli.example/rpc");
        assert_eq!(goerli.deployer_key().unwrap(), "0x01");
        assert_eq!(config.solidity, "0.8.4");
    }

    #[test]
    fn localhost_falls_back_to_the_dev_node() {
        let config = HarnessConfig::new(None, None);

        let localhost = config.network("localhost").unwrap();
        assert_eq!(localhost.rpc_url().unwrap().as_str(), "http://127.0.0.1:8545/");
        assert_eq!(localhost.chain_id, Some(31337));
    }

    #[test]
    fn goerli_endpoint_never_reaches_localhost() {
        let config = HarnessConfig::new(
            Some("https://goerli.quiknode.example/".to_string()),
            Some("0x01".to_string()),
        );

        let localhost = config.network("localhost").unwrap();
        assert_eq!(localhost.url.as_deref(), Some("http://127.0.0.1:8545"));
        assert_eq!(localhost.deployer_key().unwrap(), "0x01");
    }

    #[test]
    fn override_only_moves_the_selected_network() {
        let mut config = HarnessConfig::new(
            Some("https://goerli.quiknode.example/".to_string()),
            None,
        );

        config
            .override_rpc_url("localhost", "http://127.0.0.1:9545".to_string())
            .unwrap();

        assert_eq!(
            config.network("localhost").unwrap().url.as_deref(),
            Some("http://127.0.0.1:9545")
        );
        assert_eq!(
            config.network("goerli").unwrap().url.as_deref(),
            Some("https://goerli.quiknode.example/")
        );
        assert!(matches!(
            config.override_rpc_url("mainnet", "http://127.0.0.1:1".to_string()),
            Err(ScriptError::Config(_))
        ));
    }

    #[test]
    fn missing_values_are_config_errors() {
        let config = HarnessConfig::new(None, None);
        let goerli = config.network("goerli").unwrap();

        assert!(matches!(goerli.rpc_url(), Err(ScriptError::Config(_))));
        assert!(matches!(goerli.deployer_key(), Err(ScriptError::Config(_))));
        assert!(matches!(config.network("mainnet"), Err(ScriptError::Config(_))));
    }

    #[test]
    fn malformed_url_is_rejected() {
        let config = HarnessConfig::new(Some("not a url".to_string()), None);

        assert!(matches!(
            config.network("goerli").unwrap().rpc_url(),
            Err(ScriptError::Config(_))
        ));
    }
}
