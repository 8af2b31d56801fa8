//! # Greeting Handlers
//!
//! Draft editing and the update button.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::greeter::GreeterBinding;
use crate::app::state::AppState;
use crate::core::error::{AppError, Result};

/// Handle update-greeting button click
///
/// Submits the trimmed draft. Does nothing while the button would be disabled
/// (write pending, confirming, or blank draft).
pub(crate) fn handle_set_greeting_click(
    state: Arc<RwLock<AppState>>,
    greeter: Option<&GreeterBinding>,
) -> Result<()> {
    let (draft, control) = {
        let state = state.read();
        (state.drafts.new_greeting.trim().to_string(), state.update_control())
    };

    if !control.is_enabled() {
        tracing::debug!(?control, "Update greeting ignored");
        return Ok(());
    }

    let greeter = greeter.ok_or_else(|| AppError::State("No wallet connected".to_string()))?;
    greeter.set_greeting(draft);
    Ok(())
}

pub(crate) fn handle_greeting_input(state: Arc<RwLock<AppState>>, text: String) {
    state.write().drafts.new_greeting = text;
}

pub(crate) fn handle_message_input(state: Arc<RwLock<AppState>>, text: String) {
    state.write().drafts.message = text;
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ChainInfo;

    fn page_state(draft: &str) -> Arc<RwLock<AppState>> {
        let mut state = AppState::new(ChainInfo::base_sepolia(), "https://sepolia.basescan.org");
        state.drafts.new_greeting = draft.to_string();
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_update_without_wallet_is_state_error() {
        let state = page_state("Hello");
        let err = handle_set_greeting_click(Arc::clone(&state), None).unwrap_err();

        assert!(matches!(err, AppError::State(_)));
        assert!(!state.read().greeter.is_write_pending);
    }

    #[test]
    fn test_blank_draft_is_ignored_before_wallet_check() {
        let state = page_state("   ");
        assert!(handle_set_greeting_click(state, None).is_ok());
    }
}
