use crate::contract::CollectionStats;
use crate::ui::mvi::UiState;
use crate::wallet::{Address, TxHash};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected {
        address: Address,
    },
}

impl ConnectionState {
    pub fn address(&self) -> Option<Address> {
        match self {
            ConnectionState::Connected { address } => Some(*address),
            ConnectionState::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }
}

/// Progress of the most recent mint attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MintStatus {
    #[default]
    Idle,
    /// Started; `tx_hash` is filled in once the wallet has broadcast it.
    Pending {
        edition: String,
        tx_hash: Option<TxHash>,
    },
    Done {
        edition: String,
        tx_hash: TxHash,
    },
    Failed {
        edition: String,
        reason: String,
    },
}

impl MintStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, MintStatus::Pending { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MintState {
    pub connection: ConnectionState,
    /// `None` until the first successful read.
    pub stats: Option<CollectionStats>,
    pub mint: MintStatus,
    /// Last user-facing error. Stays until replaced.
    pub error: Option<String>,
    /// Set after a confirmed mint: the minted count no longer reflects chain.
    pub stats_stale: bool,
}

impl UiState for MintState {}
