use alloy_primitives::B256;

pub use alloy_primitives::Address;

/// A 32-byte transaction hash.
pub type TxHash = B256;

/// Shortened hash for narrow displays (`0x1234…abcd`).
pub fn short_hash(hash: &TxHash) -> String {
    let bytes = hash.as_slice();
    format!(
        "0x{}…{}",
        alloy_primitives::hex::encode(&bytes[..2]),
        alloy_primitives::hex::encode(&bytes[bytes.len() - 2..])
    )
}

/// A value-carrying contract call to be signed and sent by the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Vec<u8>,
    /// Attached payment in wei.
    pub value: u128,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    /// False when the transaction was mined but reverted.
    pub success: bool,
}
