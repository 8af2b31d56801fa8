//! # Event Handler
//!
//! Applies async task results to application state.
//!
//! Events are processed one at a time on the main thread. Each handler takes
//! the write lock for as long as it needs to fold the result in and no longer.

use crate::app::state::{AccountSnapshot, NotificationLevel};
use crate::app::{App, AppEvent};
use crate::services::greeter::ReceiptInfo;
use shared::truncate_address;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        if self.is_shut_down() {
            tracing::debug!(?event, "Dropping event after shutdown");
            return;
        }

        match event {
            AppEvent::AccountRefreshed(result) => self.handle_account_refreshed(result),
            AppEvent::MessageSigned(result) => self.handle_message_signed(result),
            AppEvent::GreetingRead(result) => self.handle_greeting_read(result),
            AppEvent::GreetingWritten(result) => self.handle_greeting_written(result),
            AppEvent::ReceiptReceived { tx_hash, result } => {
                self.handle_receipt_received(tx_hash, result)
            }
        }
    }
}

impl App {
    fn handle_account_refreshed(&mut self, result: Result<AccountSnapshot, String>) {
        let mut state = self.state.write();
        state.account.refreshing = false;

        match result {
            Ok(snapshot) => {
                tracing::debug!(
                    chain_id = snapshot.chain.id,
                    balance = %snapshot.balance.formatted,
                    "Account refreshed"
                );
                state.account.apply_snapshot(snapshot);
            }
            Err(err) => {
                // Only toast on the first failure of a streak; polling repeats it
                if state.account.error.is_none() {
                    state.notify(NotificationLevel::Warning, format!("Account refresh failed: {}", err));
                }
                tracing::warn!(error = %err, "Account refresh failed");
                state.account.error = Some(err);
            }
        }
    }

    fn handle_message_signed(&mut self, result: Result<String, String>) {
        let mut state = self.state.write();
        state.signing.is_signing = false;

        match result {
            Ok(signature) => {
                tracing::info!(signature = %truncate_address(&signature), "Message signed");
                state.signing.signature = Some(signature);
                state.signing.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Message signing failed");
                state.notify(NotificationLevel::Error, format!("Signing failed: {}", err));
                state.signing.error = Some(err);
            }
        }
    }

    fn handle_greeting_read(&mut self, result: Result<String, String>) {
        let mut state = self.state.write();
        if let Err(err) = &result {
            tracing::warn!(error = %err, "Greeting read failed");
            state.notify(NotificationLevel::Error, format!("Could not read greeting: {}", err));
        }
        state.greeter.apply_read(result);
    }

    fn handle_greeting_written(&mut self, result: Result<String, String>) {
        let tx_hash = {
            let mut state = self.state.write();
            if let Err(err) = &result {
                tracing::warn!(error = %err, "setGreeting submission failed");
                state.notify(NotificationLevel::Error, format!("Transaction failed: {}", err));
            }
            state.greeter.apply_write(result)
        };

        if let Some(tx_hash) = tx_hash {
            tracing::info!(tx_hash = %tx_hash, "setGreeting submitted, waiting for receipt");
            self.state.write().notify(
                NotificationLevel::Info,
                format!("Transaction submitted: {}", truncate_address(&tx_hash)),
            );
            if let Some(greeter) = &self.greeter {
                greeter.wait_for_confirmation(tx_hash);
            }
        }
    }

    fn handle_receipt_received(&mut self, tx_hash: String, result: Result<ReceiptInfo, String>) {
        let newly_confirmed = {
            let mut state = self.state.write();
            if let Err(err) = &result {
                tracing::warn!(tx_hash = %tx_hash, error = %err, "Transaction not confirmed");
                state.notify(NotificationLevel::Error, format!("Confirmation failed: {}", err));
            }
            let newly_confirmed = state.greeter.apply_receipt(&tx_hash, result);
            if newly_confirmed {
                state.drafts.new_greeting.clear();
                state.notify(NotificationLevel::Success, "Greeting updated");
            }
            newly_confirmed
        };

        if newly_confirmed {
            tracing::info!(tx_hash = %tx_hash, "Transaction confirmed, refreshing greeting");
            if let Some(greeter) = &self.greeter {
                greeter.refetch_greeting();
            }
        }
    }
}
