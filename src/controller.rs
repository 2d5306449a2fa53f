//! The view controller.
//!
//! Runs the three user actions (connect, refresh, mint) against the injected
//! wallet provider and feeds every outcome through [`MintReducer`]. The state
//! lives behind a mutex so spawned actions and the render loop can share it.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::config::MintSettings;
use crate::contract::{ContractError, NftContract};
use crate::ui::mint::{MintIntent, MintReducer, MintState};
use crate::ui::mvi::Reducer;
use crate::units::format_ether;
use crate::wallet::{Address, TransactionReceipt, TxHash, WalletError, WalletProvider};

pub const NO_WALLET_ON_CONNECT: &str = "Install a wallet provider to mint this NFT collection.";
pub const NO_WALLET_ON_MINT: &str = "Install a wallet provider to mint an NFT.";
pub const NOT_CONNECTED: &str = "Connect your wallet before minting.";

#[derive(Debug, Error)]
pub enum MintError {
    #[error("no wallet provider available")]
    NoProvider,

    #[error("no wallet account connected")]
    NotConnected,

    #[error("a mint is already in progress")]
    InFlight,

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("confirmation failed: {0}")]
    Confirmation(#[source] WalletError),

    #[error("transaction {tx_hash} reverted")]
    Reverted { tx_hash: TxHash },

    #[error("no confirmation after {seconds}s")]
    ConfirmationTimeout { seconds: u64 },
}

#[derive(Clone)]
pub struct Controller {
    provider: Option<Arc<dyn WalletProvider>>,
    settings: Arc<MintSettings>,
    state: Arc<Mutex<MintState>>,
}

impl Controller {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>, settings: MintSettings) -> Self {
        Self {
            provider,
            settings: Arc::new(settings),
            state: Arc::new(Mutex::new(MintState::default())),
        }
    }

    pub fn settings(&self) -> &MintSettings {
        &self.settings
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// A copy of the current state for rendering.
    pub fn snapshot(&self) -> MintState {
        self.state.lock().clone()
    }

    fn dispatch(&self, intent: MintIntent) {
        let mut state = self.state.lock();
        *state = MintReducer::reduce(std::mem::take(&mut *state), intent);
    }

    fn contract(&self) -> Option<NftContract> {
        self.provider
            .as_ref()
            .map(|provider| NftContract::new(Arc::clone(provider), self.settings.contract_address))
    }

    /// Startup: connect and read the collection side by side.
    ///
    /// The read does not wait for the connection, so stats show up even when
    /// the user declines account access.
    pub async fn on_load(&self) {
        tokio::join!(self.connect_wallet(), self.refresh_collection_stats());
    }

    pub async fn connect_wallet(&self) {
        let Some(provider) = &self.provider else {
            tracing::warn!("connect requested without a wallet provider");
            self.dispatch(MintIntent::ReportError {
                message: NO_WALLET_ON_CONNECT.to_string(),
            });
            return;
        };

        match provider.request_accounts().await {
            Ok(accounts) => match accounts.first() {
                Some(address) => {
                    tracing::info!(%address, "wallet connected");
                    self.dispatch(MintIntent::Connected { address: *address });
                    self.refresh_collection_stats().await;
                }
                None => tracing::warn!("wallet returned no accounts"),
            },
            Err(err) if err.is_user_rejection() => {
                tracing::warn!("account request rejected in wallet");
            }
            Err(err) => tracing::warn!(error = %err, "account request failed"),
        }
    }

    /// Re-reads all four collection figures. Failures leave the state as is.
    pub async fn refresh_collection_stats(&self) {
        let Some(contract) = self.contract() else {
            tracing::debug!("no wallet provider, collection stats unavailable");
            return;
        };

        match contract.read_stats().await {
            Ok(stats) => {
                tracing::info!(
                    max_supply = stats.max_supply,
                    minted = stats.minted,
                    price = %format_ether(stats.unit_price_wei),
                    owner = %stats.owner,
                    "collection stats refreshed"
                );
                self.dispatch(MintIntent::StatsLoaded { stats });
            }
            Err(err) => tracing::warn!(error = %err, "failed to read collection stats"),
        }
    }

    /// Mints `edition` to the connected account and waits for confirmation.
    ///
    /// Every attempt that gets past the guards ends in `Done` or `Failed`,
    /// except one whose confirmation never arrives with no timeout
    /// configured: that one stays `Pending`.
    pub async fn mint_token(&self, edition: &str) -> Result<TransactionReceipt, MintError> {
        let Some(contract) = self.contract() else {
            tracing::warn!(edition, "mint requested without a wallet provider");
            self.dispatch(MintIntent::ReportError {
                message: NO_WALLET_ON_MINT.to_string(),
            });
            return Err(MintError::NoProvider);
        };

        let to = self.begin_mint(edition)?;
        let metadata_uri = self.settings.metadata_uri(edition);
        tracing::info!(
            edition,
            %to,
            %metadata_uri,
            value = %format_ether(self.settings.mint_value_wei),
            "submitting mint"
        );

        let outcome = self.submit_and_confirm(&contract, to, &metadata_uri).await;
        match &outcome {
            Ok(receipt) => {
                tracing::info!(
                    edition,
                    tx_hash = %receipt.tx_hash,
                    block = ?receipt.block_number,
                    "mint confirmed"
                );
                self.dispatch(MintIntent::MintConfirmed {
                    tx_hash: receipt.tx_hash,
                });
            }
            Err(err) => {
                tracing::warn!(edition, error = %err, "mint failed");
                self.dispatch(MintIntent::MintFailed {
                    reason: err.to_string(),
                });
            }
        }
        outcome
    }

    /// Check-and-set under one lock: rejects overlapping mints and mints
    /// without an account, otherwise moves the status to `Pending`.
    fn begin_mint(&self, edition: &str) -> Result<Address, MintError> {
        let mut state = self.state.lock();
        if state.mint.is_pending() {
            tracing::warn!(edition, "mint rejected, another mint is in flight");
            return Err(MintError::InFlight);
        }
        let intent = match state.connection.address() {
            Some(_) => MintIntent::MintStarted {
                edition: edition.to_string(),
            },
            None => MintIntent::ReportError {
                message: NOT_CONNECTED.to_string(),
            },
        };
        let address = state.connection.address();
        *state = MintReducer::reduce(std::mem::take(&mut *state), intent);
        address.ok_or(MintError::NotConnected)
    }

    async fn submit_and_confirm(
        &self,
        contract: &NftContract,
        to: Address,
        metadata_uri: &str,
    ) -> Result<TransactionReceipt, MintError> {
        let tx_hash = contract
            .mint(to, to, metadata_uri, self.settings.mint_value_wei)
            .await?;
        tracing::info!(%tx_hash, "mint submitted, waiting for confirmation");
        self.dispatch(MintIntent::MintSubmitted { tx_hash });

        let confirmation = contract.confirm(tx_hash);
        let receipt = match self.settings.confirmation_timeout {
            Some(limit) => tokio::time::timeout(limit, confirmation)
                .await
                .map_err(|_| MintError::ConfirmationTimeout {
                    seconds: limit.as_secs(),
                })?,
            None => confirmation.await,
        }
        .map_err(MintError::Confirmation)?;

        if !receipt.success {
            return Err(MintError::Reverted { tx_hash });
        }
        Ok(receipt)
    }
}
