//! # Signing Handlers
//!
//! Sign-message button: an empty message raises a blocking alert and nothing
//! else; any other message goes to the wallet exactly once.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::scope::TaskScope;
use crate::app::state::{AppState, EMPTY_MESSAGE_ALERT};
use crate::core::error::{AppError, Result};
use crate::core::service::WalletProvider;

/// Handle sign button click
///
/// Internal handler function - use [`crate::app::App::handle_sign_click`] instead.
pub(crate) fn handle_sign_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    scope: &TaskScope,
    wallet: Option<Arc<dyn WalletProvider>>,
) -> Result<()> {
    let message = state.read().drafts.message.clone();

    if message.is_empty() {
        state.write().raise_alert(EMPTY_MESSAGE_ALERT);
        return Ok(());
    }

    let wallet = wallet.ok_or_else(|| AppError::State("No wallet connected".to_string()))?;

    {
        let mut state = state.write();
        if state.signing.is_signing {
            return Ok(());
        }
        state.signing.is_signing = true;
        state.signing.error = None;
    }

    tracing::info!(message_len = message.len(), "Signing message");
    scope.spawn("sign_message", async move {
        let result = wallet.sign_message(&message).await.map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::MessageSigned(result)).await;
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ChainInfo;

    fn page_state(message: &str) -> Arc<RwLock<AppState>> {
        let mut state = AppState::new(ChainInfo::base_sepolia(), "https://sepolia.basescan.org");
        state.drafts.message = message.to_string();
        Arc::new(RwLock::new(state))
    }

    #[tokio::test]
    async fn test_sign_without_wallet_is_state_error() {
        let state = page_state("gm");
        let (tx, rx) = async_channel::unbounded();

        let err = handle_sign_click(Arc::clone(&state), tx, &TaskScope::new(), None).unwrap_err();

        assert!(matches!(err, AppError::State(_)));
        assert!(!state.read().signing.is_signing);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_empty_message_alerts_even_without_wallet() {
        let state = page_state("");
        let (tx, _rx) = async_channel::unbounded();

        assert!(handle_sign_click(Arc::clone(&state), tx, &TaskScope::new(), None).is_ok());
        assert_eq!(state.read().alerts.len(), 1);
    }
}
