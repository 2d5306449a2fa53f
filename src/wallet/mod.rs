//! Wallet provider abstraction.
//!
//! The controller never talks to a node directly; it goes through an injected
//! [`WalletProvider`]. Production uses [`RpcWallet`] (JSON-RPC over HTTP to a
//! node or wallet bridge holding unlocked accounts), tests substitute a mock.

mod rpc;
mod types;

use alloy_primitives::hex::FromHexError;
use async_trait::async_trait;
use thiserror::Error;

pub use rpc::{RpcOptions, RpcWallet};
pub use types::{short_hash, Address, TransactionReceipt, TransactionRequest, TxHash};

/// JSON-RPC error code for an unsupported method.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// EIP-1193 error code for a request the user rejected in their wallet.
pub const USER_REJECTED: i64 = 4001;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("failed to reach wallet at '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("wallet returned error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("unexpected wallet response: {0}")]
    InvalidResponse(String),

    #[error("wallet returned a malformed value: {0}")]
    Hex(#[from] FromHexError),
}

impl WalletError {
    /// Transport failures are worth retrying while polling; RPC errors are not.
    pub fn is_transient(&self) -> bool {
        matches!(self, WalletError::Transport { .. })
    }

    pub fn is_user_rejection(&self) -> bool {
        matches!(self, WalletError::Rpc { code, .. } if *code == USER_REJECTED)
    }
}

/// Account access, contract reads and transaction submission.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the wallet for account access. The first account is the active one.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Execute a read-only contract call against the latest block.
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, WalletError>;

    /// Have the wallet sign and broadcast a transaction.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError>;

    /// Resolve once the transaction is included in a block.
    ///
    /// There is no built-in deadline; callers that need one wrap this in
    /// `tokio::time::timeout`.
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt, WalletError>;
}
