use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTRACT_ADDRESS: &str = "0xC27d46B3118Ec4B4bc936a9e0192f69745f33b66";
pub const DEFAULT_METADATA_BASE_URI: &str =
    "https://nftstorage.link/ipfs/bafybeiegqxyxhkie7t7fwsryprvbmbet7fwr5ss5m6nwanldiamphbglci";
pub const DEFAULT_MARKETPLACE_URL: &str = "https://testnets.opensea.io";
pub const DEFAULT_MINT_VALUE: &str = "0.001";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub contract: ContractConfig,
    #[serde(default)]
    pub marketplace: MarketplaceConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Wallet provider connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    /// JSON-RPC endpoint of the wallet/node. No endpoint means no wallet.
    #[serde(default)]
    pub rpc_url: Option<String>,
    /// Timeout for a single JSON-RPC request in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
    /// Receipt poll interval in milliseconds (default: 1000).
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// Give up waiting for a mint confirmation after this many seconds.
    /// Unset waits forever.
    #[serde(default)]
    pub confirmation_timeout_seconds: Option<u64>,
}

/// The deployed collection contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    #[serde(default = "default_contract_address")]
    pub address: String,
    /// Payment attached to every mint, in ether (e.g. "0.001").
    #[serde(default = "default_mint_value")]
    pub mint_value: String,
    /// Base path the `<edition>.json` metadata documents live under.
    #[serde(default = "default_metadata_base_uri")]
    pub metadata_base_uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    /// Profile pages are `<profile_base_url>/<address>?tab=activity`.
    #[serde(default = "default_marketplace_url")]
    pub profile_base_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog to use instead of the bundled one.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_request_timeout() -> u32 {
    30
}

fn default_poll_interval() -> u64 {
    1000
}

fn default_contract_address() -> String {
    DEFAULT_CONTRACT_ADDRESS.to_string()
}

fn default_mint_value() -> String {
    DEFAULT_MINT_VALUE.to_string()
}

fn default_metadata_base_uri() -> String {
    DEFAULT_METADATA_BASE_URI.to_string()
}

fn default_marketplace_url() -> String {
    DEFAULT_MARKETPLACE_URL.to_string()
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            rpc_url: None,
            request_timeout_seconds: default_request_timeout(),
            poll_interval_ms: default_poll_interval(),
            confirmation_timeout_seconds: None,
        }
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: default_contract_address(),
            mint_value: default_mint_value(),
            metadata_base_uri: default_metadata_base_uri(),
        }
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            profile_base_url: default_marketplace_url(),
        }
    }
}
