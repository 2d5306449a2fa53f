use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use alloy_primitives::hex;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    Address, TransactionReceipt, TransactionRequest, TxHash, WalletError, WalletProvider,
    METHOD_NOT_FOUND,
};

/// Transport settings for [`RpcWallet`].
#[derive(Debug, Clone)]
pub struct RpcOptions {
    /// Deadline for a single JSON-RPC round trip.
    pub request_timeout: Duration,
    /// Delay between receipt polls.
    pub poll_interval: Duration,
}

impl Default for RpcOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// JSON-RPC 2.0 wallet provider backed by a node with unlocked accounts.
pub struct RpcWallet {
    client: Client,
    url: String,
    poll_interval: Duration,
    next_id: AtomicU64,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReceipt {
    transaction_hash: String,
    #[serde(default)]
    block_number: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl RawReceipt {
    fn into_receipt(self) -> Result<TransactionReceipt, WalletError> {
        let block_number = self.block_number.as_deref().map(parse_quantity).transpose()?;
        // Pre-Byzantium receipts carry no status; treat inclusion as success.
        let success = match self.status.as_deref() {
            Some(status) => parse_quantity(status)? == 1,
            None => true,
        };
        Ok(TransactionReceipt {
            tx_hash: self.transaction_hash.parse()?,
            block_number,
            success,
        })
    }
}

fn parse_quantity(value: &str) -> Result<u64, WalletError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| WalletError::InvalidResponse(format!("quantity '{value}' lacks 0x")))?;
    u64::from_str_radix(digits, 16)
        .map_err(|_| WalletError::InvalidResponse(format!("invalid quantity '{value}'")))
}

fn parse_data(value: &str) -> Result<Vec<u8>, WalletError> {
    hex::decode(value).map_err(|e| WalletError::InvalidResponse(format!("invalid data: {e}")))
}

fn encode_data(data: &[u8]) -> String {
    hex::encode_prefixed(data)
}

impl RpcWallet {
    pub fn new(url: impl Into<String>, options: RpcOptions) -> Result<Self, WalletError> {
        let url = url.into();
        let client = Client::builder()
            .timeout(options.request_timeout)
            .build()
            .map_err(|source| WalletError::Transport {
                url: url.clone(),
                source,
            })?;
        Ok(Self {
            client,
            url,
            poll_interval: options.poll_interval,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, WalletError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        tracing::trace!(id, method, "JSON-RPC request");

        let transport = |source| WalletError::Transport {
            url: self.url.clone(),
            source,
        };
        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(transport)?
            .error_for_status()
            .map_err(transport)?
            .json()
            .await
            .map_err(transport)?;

        if let Some(error) = response.error {
            return Err(WalletError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        serde_json::from_value(response.result)
            .map_err(|e| WalletError::InvalidResponse(format!("{method}: {e}")))
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        let accounts: Vec<String> = match self.request("eth_requestAccounts", json!([])).await {
            Err(WalletError::Rpc { code, .. }) if code == METHOD_NOT_FOUND => {
                tracing::debug!("eth_requestAccounts unsupported, falling back to eth_accounts");
                self.request("eth_accounts", json!([])).await?
            }
            other => other?,
        };
        accounts
            .iter()
            .map(|account| account.parse().map_err(WalletError::from))
            .collect()
    }

    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, WalletError> {
        let params = json!([{ "to": to.to_string(), "data": encode_data(&data) }, "latest"]);
        let output: String = self.request("eth_call", params).await?;
        parse_data(&output)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, WalletError> {
        let params = json!([{
            "from": tx.from.to_string(),
            "to": tx.to.to_string(),
            "data": encode_data(&tx.data),
            "value": format!("{:#x}", tx.value),
        }]);
        let hash: String = self.request("eth_sendTransaction", params).await?;
        Ok(hash.parse()?)
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransactionReceipt, WalletError> {
        loop {
            let polled: Result<Option<RawReceipt>, WalletError> = self
                .request("eth_getTransactionReceipt", json!([tx_hash.to_string()]))
                .await;
            match polled {
                Ok(Some(raw)) => return raw.into_receipt(),
                Ok(None) => tracing::trace!(%tx_hash, "receipt not available yet"),
                Err(err) if err.is_transient() => {
                    tracing::debug!(%tx_hash, error = %err, "receipt poll failed, retrying");
                }
                Err(err) => return Err(err),
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
