mod loader;
mod settings;
mod types;

pub use loader::ConfigError;
pub use settings::MintSettings;
pub use types::{
    CatalogConfig, Config, ContractConfig, MarketplaceConfig, WalletConfig,
    DEFAULT_CONTRACT_ADDRESS, DEFAULT_MARKETPLACE_URL, DEFAULT_METADATA_BASE_URI,
    DEFAULT_MINT_VALUE,
};
