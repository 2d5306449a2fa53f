//! Command-line surface and the headless commands.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::controller::{Controller, MintError};
use crate::ui::view::{project, render_text};
use crate::wallet::{RpcWallet, WalletError, WalletProvider};

#[derive(Debug, Parser)]
#[command(
    name = "mintterm",
    version,
    about = "Connect a wallet, check a collection's mint status and mint editions"
)]
pub struct Cli {
    /// Config file (default: <config dir>/mintterm/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Wallet JSON-RPC endpoint, overrides wallet.rpc_url
    #[arg(long, global = true, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Catalog JSON file, overrides catalog.path
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Log file for the interactive UI
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print wallet and collection status
    Status,
    /// Mint an edition and wait for confirmation
    Mint {
        /// Edition identifier from the catalog
        edition: String,
    },
    /// List the catalog
    Catalog,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Edition '{edition}' is not in the catalog")]
    UnknownEdition { edition: String },

    #[error("Mint failed: {source}\n{report}")]
    MintFailed {
        #[source]
        source: MintError,
        report: String,
    },
}

/// Builds the wallet provider named by the config, if any.
pub fn wallet_from_config(
    config: &Config,
) -> Result<Option<Arc<dyn WalletProvider>>, WalletError> {
    let Some(url) = &config.wallet.rpc_url else {
        return Ok(None);
    };
    let wallet = RpcWallet::new(url.clone(), config.rpc_options())?;
    tracing::info!(url = wallet.url(), "using JSON-RPC wallet provider");
    Ok(Some(Arc::new(wallet)))
}

fn report(controller: &Controller, catalog: &Catalog) -> String {
    render_text(&project(&controller.snapshot(), catalog, controller.settings()))
}

/// Connects (when a wallet exists), reads the collection and reports.
pub async fn status(controller: &Controller, catalog: &Catalog) -> String {
    controller.on_load().await;
    report(controller, catalog)
}

/// Connects, mints `edition` and reports the final state.
pub async fn mint(
    controller: &Controller,
    catalog: &Catalog,
    edition: &str,
) -> Result<String, CommandError> {
    if catalog.get(edition).is_none() {
        return Err(CommandError::UnknownEdition {
            edition: edition.to_string(),
        });
    }
    controller.on_load().await;
    match controller.mint_token(edition).await {
        Ok(_) => Ok(report(controller, catalog)),
        Err(source) => Err(CommandError::MintFailed {
            source,
            report: report(controller, catalog),
        }),
    }
}

pub fn list_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for item in catalog.items() {
        let _ = writeln!(out, "#{:<6} {}", item.edition, item.name);
        let _ = writeln!(out, "        {}", item.description);
        let _ = writeln!(out, "        {}", item.image);
    }
    out
}
