//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_node;

use async_trait::async_trait;
use mintterm::config::{Config, MintSettings};
use mintterm::contract::abi::selector;
use mintterm::contract::{MAX_SUPPLY_FN, MINT_PRICE_FN, OWNER_FN, TOTAL_SUPPLY_FN};
use mintterm::controller::Controller;
use mintterm::ui::mint::MintState;
use mintterm::wallet::{
    Address, TransactionReceipt, TransactionRequest, TxHash, WalletError, WalletProvider,
    USER_REJECTED,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const ACCOUNT: Address = Address::new([0xa1; 20]);
pub const SECOND_ACCOUNT: Address = Address::new([0xa2; 20]);
pub const OWNER: Address = Address::new([0x0e; 20]);
pub const TX: TxHash = TxHash::new([0x7f; 32]);

/// 0.001 ether.
pub const PRICE_WEI: u128 = 1_000_000_000_000_000;

pub fn uint_word(value: u128) -> Vec<u8> {
    let mut word = vec![0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

pub fn address_word(address: &Address) -> Vec<u8> {
    let mut word = vec![0u8; 32];
    word[12..].copy_from_slice(address.as_slice());
    word
}

/// How `wait_for_receipt` resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptMode {
    Success,
    Reverted,
    /// Never resolves.
    Never,
    /// Fails with an RPC error.
    Error,
}

/// In-memory wallet provider.
///
/// Contract reads are answered from a selector table; anything missing
/// fails like a reverted `eth_call`.
pub struct MockWallet {
    accounts: Mutex<Result<Vec<Address>, i64>>,
    reads: Mutex<HashMap<[u8; 4], Vec<u8>>>,
    send_error: Mutex<Option<i64>>,
    receipt: Mutex<ReceiptMode>,
    sent: Mutex<Vec<TransactionRequest>>,
    read_count: Mutex<usize>,
}

impl MockWallet {
    /// One connected account; collection at 100 max / 40 minted / 0.001 ether.
    pub fn new() -> Self {
        let wallet = Self {
            accounts: Mutex::new(Ok(vec![ACCOUNT, SECOND_ACCOUNT])),
            reads: Mutex::new(HashMap::new()),
            send_error: Mutex::new(None),
            receipt: Mutex::new(ReceiptMode::Success),
            sent: Mutex::new(Vec::new()),
            read_count: Mutex::new(0),
        };
        wallet.set_stats(100, 40, PRICE_WEI);
        wallet.set_owner(Some(OWNER));
        wallet
    }

    pub fn with_accounts(self, accounts: Vec<Address>) -> Self {
        *self.accounts.lock() = Ok(accounts);
        self
    }

    /// Account requests fail with the given JSON-RPC error code.
    pub fn with_account_error(self, code: i64) -> Self {
        *self.accounts.lock() = Err(code);
        self
    }

    pub fn rejecting_accounts(self) -> Self {
        self.with_account_error(USER_REJECTED)
    }

    pub fn with_send_error(self, code: i64) -> Self {
        *self.send_error.lock() = Some(code);
        self
    }

    pub fn with_receipt(self, mode: ReceiptMode) -> Self {
        *self.receipt.lock() = mode;
        self
    }

    pub fn without_reads(self) -> Self {
        self.reads.lock().clear();
        self
    }

    pub fn set_stats(&self, max_supply: u128, minted: u128, price_wei: u128) {
        let mut reads = self.reads.lock();
        reads.insert(selector(MAX_SUPPLY_FN), uint_word(max_supply));
        reads.insert(selector(TOTAL_SUPPLY_FN), uint_word(minted));
        reads.insert(selector(MINT_PRICE_FN), uint_word(price_wei));
    }

    pub fn set_owner(&self, owner: Option<Address>) {
        let mut reads = self.reads.lock();
        match owner {
            Some(owner) => reads.insert(selector(OWNER_FN), address_word(&owner)),
            None => reads.remove(&selector(OWNER_FN)),
        };
    }

    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().clone()
    }

    pub fn read_count(&self) -> usize {
        *self.read_count.lock()
    }
}

fn rpc_error(code: i64, message: &str) -> WalletError {
    WalletError::Rpc {
        code,
        message: message.to_string(),
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        self.accounts
            .lock()
            .clone()
            .map_err(|code| rpc_error(code, "account request failed"))
    }

    async fn call(&self, _to: Address, data: Vec<u8>) -> Result<Vec<u8>, WalletError> {
        *self.read_count.lock() += 1;
        let mut key = [0u8; 4];
        key.copy_from_slice(&data[..4]);
        self.reads
            .lock()
            .get(&key)
            .cloned()
            .ok_or_else(|| rpc_error(-32000, "execution reverted"))
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        if let Some(code) = *self.send_error.lock() {
            return Err(rpc_error(code, "transaction rejected"));
        }
        self.sent.lock().push(tx);
        Ok(TX)
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt, WalletError> {
        let mode = *self.receipt.lock();
        match mode {
            ReceiptMode::Success | ReceiptMode::Reverted => Ok(TransactionReceipt {
                tx_hash,
                block_number: Some(42),
                success: mode == ReceiptMode::Success,
            }),
            ReceiptMode::Never => std::future::pending().await,
            ReceiptMode::Error => Err(rpc_error(-32000, "receipt lookup failed")),
        }
    }
}

pub fn default_settings() -> MintSettings {
    MintSettings::from_config(&Config::default()).expect("default config resolves")
}

pub fn controller_with(wallet: &Arc<MockWallet>) -> Controller {
    let provider: Arc<dyn WalletProvider> = wallet.clone();
    Controller::new(Some(provider), default_settings())
}

pub fn controller_without_wallet() -> Controller {
    Controller::new(None, default_settings())
}

/// Polls the controller state until `predicate` holds or a second passes.
pub async fn wait_for_state(controller: &Controller, predicate: impl Fn(&MintState) -> bool) {
    for _ in 0..100 {
        if predicate(&controller.snapshot()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("state never matched: {:?}", controller.snapshot());
}
