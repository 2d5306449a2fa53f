//! Config values resolved into the types the controller works with.

use std::time::Duration;

use crate::config::loader::ConfigError;
use crate::config::types::Config;
use crate::units::parse_ether;
use crate::wallet::{Address, RpcOptions};

/// Everything a mint needs that is fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintSettings {
    pub contract_address: Address,
    /// Payment attached to every mint, independent of the on-chain price.
    pub mint_value_wei: u128,
    pub metadata_base_uri: String,
    pub marketplace_base_url: String,
    pub confirmation_timeout: Option<Duration>,
}

impl MintSettings {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let contract_address = config.contract.address.parse().map_err(|e| {
            ConfigError::ValidationError {
                message: format!("contract.address '{}': {}", config.contract.address, e),
            }
        })?;
        let mint_value_wei =
            parse_ether(&config.contract.mint_value).map_err(|e| ConfigError::ValidationError {
                message: format!("contract.mint_value: {}", e),
            })?;
        let metadata_base_uri = config.contract.metadata_base_uri.trim_end_matches('/');
        if metadata_base_uri.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "contract.metadata_base_uri must not be empty".to_string(),
            });
        }

        Ok(Self {
            contract_address,
            mint_value_wei,
            metadata_base_uri: metadata_base_uri.to_string(),
            marketplace_base_url: config
                .marketplace
                .profile_base_url
                .trim_end_matches('/')
                .to_string(),
            confirmation_timeout: config
                .wallet
                .confirmation_timeout_seconds
                .map(Duration::from_secs),
        })
    }

    /// `<metadata base>/<edition>.json`
    pub fn metadata_uri(&self, edition: &str) -> String {
        format!("{}/{}.json", self.metadata_base_uri, edition)
    }

    /// `<marketplace base>/<address>?tab=activity`
    pub fn marketplace_link(&self, address: &Address) -> String {
        format!("{}/{}?tab=activity", self.marketplace_base_url, address)
    }
}

impl Config {
    pub fn rpc_options(&self) -> RpcOptions {
        RpcOptions {
            request_timeout: Duration::from_secs(u64::from(self.wallet.request_timeout_seconds)),
            poll_interval: Duration::from_millis(self.wallet.poll_interval_ms),
        }
    }
}
