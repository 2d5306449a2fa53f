//! Pure projection from [`MintState`] to what the screen (or the headless
//! commands) display.

use crate::catalog::Catalog;
use crate::config::MintSettings;
use crate::contract::OwnerAddress;
use crate::ui::mint::{MintState, MintStatus};
use crate::units::format_ether;
use crate::wallet::short_hash;

pub const CURRENCY: &str = "ETH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub edition: String,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintView {
    pub connected: bool,
    pub wallet_address: Option<String>,
    pub marketplace_link: Option<String>,
    pub contract_address: String,
    pub owner: String,
    pub max_supply: Option<u64>,
    pub remaining: Option<u64>,
    /// Decimal display price, without currency suffix.
    pub mint_price: Option<String>,
    pub stats_stale: bool,
    pub status_line: String,
    pub error: Option<String>,
    pub cards: Vec<CardView>,
}

impl MintView {
    pub fn price_label(&self) -> String {
        match &self.mint_price {
            Some(price) => format!("{price} {CURRENCY}"),
            None => "unknown".to_string(),
        }
    }

    pub fn remaining_label(&self) -> String {
        let mut label = match (self.remaining, self.max_supply) {
            (Some(remaining), Some(max)) => format!("{remaining} / {max}"),
            _ => "unknown".to_string(),
        };
        if self.stats_stale {
            label.push_str(" (stale, press r to refresh)");
        }
        label
    }
}

pub fn status_line(status: &MintStatus) -> String {
    match status {
        MintStatus::Idle => String::new(),
        MintStatus::Pending {
            edition,
            tx_hash: None,
        } => format!("⌛ Minting edition {edition}... confirm in your wallet"),
        MintStatus::Pending {
            edition,
            tx_hash: Some(tx_hash),
        } => format!("⌛ Minting edition {edition}... tx {}", short_hash(tx_hash)),
        MintStatus::Done { edition, tx_hash } => {
            format!("✅ Done. Edition {edition} minted in tx {}", short_hash(tx_hash))
        }
        MintStatus::Failed { edition, reason } => {
            format!("❌ Mint of edition {edition} failed: {reason}")
        }
    }
}

pub fn project(state: &MintState, catalog: &Catalog, settings: &MintSettings) -> MintView {
    let address = state.connection.address();
    let stats = state.stats.as_ref();

    MintView {
        connected: state.connection.is_connected(),
        wallet_address: address.map(|a| a.to_string()),
        marketplace_link: address.map(|a| settings.marketplace_link(&a)),
        contract_address: settings.contract_address.to_string(),
        owner: stats
            .map(|s| s.owner)
            .unwrap_or(OwnerAddress::Unknown)
            .to_string(),
        max_supply: stats.map(|s| s.max_supply),
        remaining: stats.map(|s| s.remaining()),
        mint_price: stats.map(|s| format_ether(s.unit_price_wei)),
        stats_stale: state.stats_stale,
        status_line: status_line(&state.mint),
        error: state.error.clone(),
        cards: catalog
            .items()
            .iter()
            .map(|item| CardView {
                edition: item.edition.clone(),
                name: item.name.clone(),
                description: item.description.clone(),
                image: item.image.clone(),
            })
            .collect(),
    }
}

/// Plain-text rendering used by the headless commands.
pub fn render_text(view: &MintView) -> String {
    let mut lines = Vec::new();
    match &view.wallet_address {
        Some(address) => lines.push(format!("Wallet:           {address}")),
        None => lines.push("Wallet:           not connected".to_string()),
    }
    if let Some(link) = &view.marketplace_link {
        lines.push(format!("Marketplace:      {link}"));
    }
    lines.push(format!("Contract address: {}", view.contract_address));
    lines.push(format!("Owner address:    {}", view.owner));
    lines.push(format!("Remaining NFTs:   {}", view.remaining_label()));
    lines.push(format!("Mint price:       {}", view.price_label()));
    if !view.status_line.is_empty() {
        lines.push(view.status_line.clone());
    }
    if let Some(error) = &view.error {
        lines.push(format!("Error: {error}"));
    }
    lines.join("\n")
}
