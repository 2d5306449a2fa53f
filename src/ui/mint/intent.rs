use crate::contract::CollectionStats;
use crate::ui::mvi::Intent;
use crate::wallet::{Address, TxHash};

#[derive(Debug, Clone)]
pub enum MintIntent {
    /// A condition the user has to act on (no wallet, not connected).
    ReportError { message: String },
    Connected { address: Address },
    StatsLoaded { stats: CollectionStats },
    MintStarted { edition: String },
    /// The wallet broadcast the transaction.
    MintSubmitted { tx_hash: TxHash },
    MintConfirmed { tx_hash: TxHash },
    MintFailed { reason: String },
}

impl Intent for MintIntent {}
