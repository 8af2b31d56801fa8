//! # Account Refresh Task
//!
//! Reads the wallet's active chain and balance and reports both together.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

use crate::app::events::AppEvent;
use crate::app::scope::TaskScope;
use crate::app::state::{AccountSnapshot, AppState};
use crate::core::service::WalletProvider;
use crate::services::wallet::WalletError;

/// Refresh chain and balance.
///
/// Internal task function - skips if a refresh is already in flight.
pub(crate) fn refresh_account(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    scope: &TaskScope,
    wallet: Arc<dyn WalletProvider>,
) {
    {
        let mut state = state.write();
        if state.account.refreshing {
            return;
        }
        state.account.refreshing = true;
        state.account.last_refresh = Some(Instant::now());
    }

    scope.spawn("account_refresh", async move {
        let result = fetch_snapshot(wallet.as_ref()).await.map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::AccountRefreshed(result)).await;
    });
}

async fn fetch_snapshot(wallet: &dyn WalletProvider) -> Result<AccountSnapshot, WalletError> {
    let chain = wallet.chain().await?;
    let balance = wallet.balance().await?;
    Ok(AccountSnapshot { chain, balance })
}
