//! Minting through the controller: payload, status transitions and the
//! single-flight guard.

mod common;

use common::*;
use mintterm::config::DEFAULT_METADATA_BASE_URI;
use mintterm::controller::{Controller, MintError, NOT_CONNECTED, NO_WALLET_ON_MINT};
use mintterm::ui::mint::MintStatus;
use mintterm::wallet::{WalletProvider, USER_REJECTED};
use std::sync::Arc;
use std::time::Duration;

async fn connected(wallet: &Arc<MockWallet>) -> Controller {
    let controller = controller_with(wallet);
    controller.connect_wallet().await;
    assert!(controller.snapshot().connection.is_connected());
    controller
}

#[tokio::test]
async fn mint_sends_metadata_uri_and_fixed_value() {
    let wallet = Arc::new(MockWallet::new());
    // On-chain price differs from the configured payment.
    wallet.set_stats(100, 40, 5 * PRICE_WEI);
    let controller = connected(&wallet).await;

    let receipt = controller.mint_token("7").await.expect("mint succeeds");
    assert_eq!(receipt.tx_hash, TX);

    let sent = wallet.sent();
    assert_eq!(sent.len(), 1);
    let tx = &sent[0];
    assert_eq!(tx.from, ACCOUNT);
    assert_eq!(tx.to, controller.settings().contract_address);
    assert_eq!(tx.value, PRICE_WEI);

    let uri = format!("{DEFAULT_METADATA_BASE_URI}/7.json");
    assert!(uri.ends_with("/7.json"));
    assert!(tx
        .data
        .windows(uri.len())
        .any(|window| window == uri.as_bytes()));
    // Recipient is the first argument.
    assert_eq!(&tx.data[4 + 12..4 + 32], ACCOUNT.as_slice());
}

#[tokio::test]
async fn confirmed_mint_is_done_and_marks_stats_stale() {
    let wallet = Arc::new(MockWallet::new());
    let controller = connected(&wallet).await;

    controller.mint_token("3").await.expect("mint succeeds");

    let state = controller.snapshot();
    assert_eq!(
        state.mint,
        MintStatus::Done {
            edition: "3".to_string(),
            tx_hash: TX,
        }
    );
    assert!(state.stats_stale);
    // Minted count is not re-read automatically.
    assert_eq!(state.stats.as_ref().unwrap().minted, 40);

    wallet.set_stats(100, 41, PRICE_WEI);
    controller.refresh_collection_stats().await;
    let state = controller.snapshot();
    assert!(!state.stats_stale);
    assert_eq!(state.stats.unwrap().remaining(), 59);
}

#[tokio::test]
async fn unconfirmed_mint_stays_pending() {
    let wallet = Arc::new(MockWallet::new().with_receipt(ReceiptMode::Never));
    let controller = connected(&wallet).await;

    let outcome =
        tokio::time::timeout(Duration::from_millis(200), controller.mint_token("1")).await;

    assert!(outcome.is_err(), "confirmation should never resolve");
    assert_eq!(
        controller.snapshot().mint,
        MintStatus::Pending {
            edition: "1".to_string(),
            tx_hash: Some(TX),
        }
    );
}

#[tokio::test]
async fn second_mint_while_pending_is_rejected() {
    let wallet = Arc::new(MockWallet::new().with_receipt(ReceiptMode::Never));
    let controller = connected(&wallet).await;

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.mint_token("1").await })
    };
    wait_for_state(&controller, |state| state.mint.is_pending()).await;

    let second = controller.mint_token("2").await;
    assert!(matches!(second, Err(MintError::InFlight)));
    assert_eq!(wallet.sent().len(), 1);
    assert!(matches!(
        controller.snapshot().mint,
        MintStatus::Pending { ref edition, .. } if edition == "1"
    ));

    first.abort();
}

#[tokio::test]
async fn reverted_mint_fails() {
    let wallet = Arc::new(MockWallet::new().with_receipt(ReceiptMode::Reverted));
    let controller = connected(&wallet).await;

    let outcome = controller.mint_token("4").await;

    assert!(matches!(outcome, Err(MintError::Reverted { tx_hash }) if tx_hash == TX));
    let state = controller.snapshot();
    assert!(matches!(state.mint, MintStatus::Failed { ref edition, .. } if edition == "4"));
    assert!(!state.stats_stale);
}

#[tokio::test]
async fn rejected_transaction_fails_and_allows_retry() {
    let wallet = Arc::new(MockWallet::new().with_send_error(USER_REJECTED));
    let controller = connected(&wallet).await;

    let outcome = controller.mint_token("2").await;
    assert!(matches!(outcome, Err(MintError::Contract(_))));
    assert!(matches!(controller.snapshot().mint, MintStatus::Failed { .. }));

    // Failed is terminal for that attempt only.
    let retry = controller.mint_token("2").await;
    assert!(matches!(retry, Err(MintError::Contract(_))));
}

#[tokio::test]
async fn receipt_error_fails_mint() {
    let wallet = Arc::new(MockWallet::new().with_receipt(ReceiptMode::Error));
    let controller = connected(&wallet).await;

    let outcome = controller.mint_token("5").await;

    assert!(matches!(outcome, Err(MintError::Confirmation(_))));
    assert!(matches!(controller.snapshot().mint, MintStatus::Failed { .. }));
}

#[tokio::test]
async fn confirmation_timeout_fails_mint() {
    let wallet = Arc::new(MockWallet::new().with_receipt(ReceiptMode::Never));
    let mut settings = default_settings();
    settings.confirmation_timeout = Some(Duration::from_millis(50));
    let provider: Arc<dyn WalletProvider> = wallet.clone();
    let controller = Controller::new(Some(provider), settings);
    controller.connect_wallet().await;

    let outcome = controller.mint_token("6").await;

    assert!(matches!(outcome, Err(MintError::ConfirmationTimeout { .. })));
    assert!(matches!(controller.snapshot().mint, MintStatus::Failed { .. }));
}

#[tokio::test]
async fn mint_without_connection_is_refused() {
    let wallet = Arc::new(MockWallet::new());
    let controller = controller_with(&wallet);

    let outcome = controller.mint_token("1").await;

    assert!(matches!(outcome, Err(MintError::NotConnected)));
    let state = controller.snapshot();
    assert_eq!(state.mint, MintStatus::Idle);
    assert_eq!(state.error.as_deref(), Some(NOT_CONNECTED));
    assert!(wallet.sent().is_empty());
}

#[tokio::test]
async fn mint_without_provider_reports_install_message() {
    let controller = controller_without_wallet();

    let outcome = controller.mint_token("1").await;

    assert!(matches!(outcome, Err(MintError::NoProvider)));
    let state = controller.snapshot();
    assert_eq!(state.mint, MintStatus::Idle);
    assert_eq!(state.error.as_deref(), Some(NO_WALLET_ON_MINT));
}
