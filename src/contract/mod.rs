//! Typed access to the deployed NFT collection contract.

pub mod abi;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::contract::abi::{
    decode_address, decode_amount, decode_count, encode_call, AbiError, Token,
};
use crate::wallet::{
    Address, TransactionReceipt, TransactionRequest, TxHash, WalletError, WalletProvider,
};

pub const MAX_SUPPLY_FN: &str = "MAX_SUPPLY()";
pub const TOTAL_SUPPLY_FN: &str = "totalSupply()";
pub const MINT_PRICE_FN: &str = "MINT_PRICE()";
pub const OWNER_FN: &str = "owner()";
pub const MINT_FN: &str = "safeMint(address,string)";

#[derive(Debug, Error)]
pub enum ContractError {
    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("failed to decode '{function}' result: {source}")]
    Decode {
        function: &'static str,
        #[source]
        source: AbiError,
    },
}

/// Contract owner as last read from chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerAddress {
    /// Not read yet (or every read so far failed).
    #[default]
    Unknown,
    Known(Address),
}

impl fmt::Display for OwnerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerAddress::Unknown => f.write_str("unknown"),
            OwnerAddress::Known(address) => address.fmt(f),
        }
    }
}

/// Collection figures mirrored from the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStats {
    pub max_supply: u64,
    pub minted: u64,
    /// Mint price in wei.
    pub unit_price_wei: u128,
    pub owner: OwnerAddress,
}

impl CollectionStats {
    pub fn remaining(&self) -> u64 {
        self.max_supply.saturating_sub(self.minted)
    }
}

pub struct NftContract {
    provider: Arc<dyn WalletProvider>,
    address: Address,
}

impl NftContract {
    pub fn new(provider: Arc<dyn WalletProvider>, address: Address) -> Self {
        Self { provider, address }
    }

    async fn read(&self, function: &'static str) -> Result<Vec<u8>, ContractError> {
        let output = self
            .provider
            .call(self.address, encode_call(function, &[]))
            .await?;
        Ok(output)
    }

    async fn read_amount(&self, function: &'static str) -> Result<u128, ContractError> {
        let output = self.read(function).await?;
        decode_amount(&output).map_err(|source| ContractError::Decode { function, source })
    }

    async fn read_count(&self, function: &'static str) -> Result<u64, ContractError> {
        let output = self.read(function).await?;
        decode_count(&output).map_err(|source| ContractError::Decode { function, source })
    }

    pub async fn max_supply(&self) -> Result<u64, ContractError> {
        self.read_count(MAX_SUPPLY_FN).await
    }

    pub async fn total_supply(&self) -> Result<u64, ContractError> {
        self.read_count(TOTAL_SUPPLY_FN).await
    }

    /// Mint price in wei.
    pub async fn mint_price(&self) -> Result<u128, ContractError> {
        self.read_amount(MINT_PRICE_FN).await
    }

    pub async fn owner(&self) -> Result<Address, ContractError> {
        let output = self.read(OWNER_FN).await?;
        decode_address(&output).map_err(|source| ContractError::Decode {
            function: OWNER_FN,
            source,
        })
    }

    /// Reads all four collection figures. Fails as a whole if any read fails.
    pub async fn read_stats(&self) -> Result<CollectionStats, ContractError> {
        let max_supply = self.max_supply().await?;
        let minted = self.total_supply().await?;
        let unit_price_wei = self.mint_price().await?;
        let owner = self.owner().await?;
        Ok(CollectionStats {
            max_supply,
            minted,
            unit_price_wei,
            owner: OwnerAddress::Known(owner),
        })
    }

    /// Submits `safeMint(to, metadata_uri)` from `from`, paying `value` wei.
    pub async fn mint(
        &self,
        from: Address,
        to: Address,
        metadata_uri: &str,
        value: u128,
    ) -> Result<TxHash, ContractError> {
        let data = encode_call(
            MINT_FN,
            &[Token::Address(to), Token::String(metadata_uri.to_string())],
        );
        let tx = TransactionRequest {
            from,
            to: self.address,
            data,
            value,
        };
        Ok(self.provider.send_transaction(tx).await?)
    }

    /// Waits for `tx_hash` to be mined. Does not time out on its own.
    pub async fn confirm(&self, tx_hash: TxHash) -> Result<TransactionReceipt, WalletError> {
        self.provider.wait_for_receipt(tx_hash).await
    }
}
