//! # Greeter Contract Binding
//!
//! One "current value + pending mutation" object for the greeter contract's
//! `greet` / `setGreeting` pair.
//!
//! [`GreeterState`] holds everything the page reads: the greeting, read error,
//! write-pending flag and error, confirming/confirmed flags, confirm error and
//! the last transaction hash. [`GreeterBinding`] owns the contract handle and
//! starts the three async operations; their results come back as
//! [`AppEvent`]s and are folded into the state by the `apply_*` methods.
//!
//! ## Write lifecycle
//!
//! ```text
//! Idle ──set_greeting──▶ Submitting ──hash──▶ Confirming ──receipt──▶ Confirmed
//!                            │                    │
//!                            └──error──▶ Failed ◀─┘
//! ```
//!
//! Nothing here retries and nothing validates the greeting text; the page
//! trims and checks the draft before calling [`GreeterBinding::set_greeting`].

use async_channel::Sender;
use chrono::{DateTime, Local};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::scope::TaskScope;
use crate::app::state::AppState;
use crate::core::service::GreeterContract;
use crate::services::greeter::ReceiptInfo;

/// Where the current write stands. Derived from [`GreeterState`], never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxLifecycle {
    Idle,
    Submitting,
    Submitted(String),
    Confirming(String),
    Confirmed(String),
    Failed(String),
}

/// Why the update button is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    WritePending,
    Confirming,
    EmptyDraft,
}

/// Greeting update button state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateControl {
    Enabled,
    Disabled(DisabledReason),
}

impl UpdateControl {
    pub fn is_enabled(&self) -> bool {
        matches!(self, UpdateControl::Enabled)
    }

    /// Show a spinner instead of the label.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            UpdateControl::Disabled(DisabledReason::WritePending | DisabledReason::Confirming)
        )
    }
}

/// Read/write/confirm state of the greeter contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GreeterState {
    /// Last greeting read; `None` while the first read is outstanding
    pub greeting: Option<String>,
    pub read_error: Option<String>,
    pub is_write_pending: bool,
    pub write_error: Option<String>,
    pub is_confirming: bool,
    pub is_confirmed: bool,
    pub confirm_error: Option<String>,
    /// Hash of the pending or last submitted transaction
    pub transaction_hash: Option<String>,
    pub submitted_at: Option<DateTime<Local>>,
    pub last_receipt: Option<ReceiptInfo>,
}

impl GreeterState {
    pub fn lifecycle(&self) -> TxLifecycle {
        if self.is_write_pending {
            return TxLifecycle::Submitting;
        }
        if let Some(err) = self.write_error.as_ref().or(self.confirm_error.as_ref()) {
            return TxLifecycle::Failed(err.clone());
        }
        match &self.transaction_hash {
            Some(hash) if self.is_confirming => TxLifecycle::Confirming(hash.clone()),
            Some(hash) if self.is_confirmed => TxLifecycle::Confirmed(hash.clone()),
            Some(hash) => TxLifecycle::Submitted(hash.clone()),
            None => TxLifecycle::Idle,
        }
    }

    /// Update button state: disabled while writing, while confirming, or when
    /// the trimmed draft is empty.
    pub fn update_control(&self, draft: &str) -> UpdateControl {
        if self.is_write_pending {
            UpdateControl::Disabled(DisabledReason::WritePending)
        } else if self.is_confirming {
            UpdateControl::Disabled(DisabledReason::Confirming)
        } else if draft.trim().is_empty() {
            UpdateControl::Disabled(DisabledReason::EmptyDraft)
        } else {
            UpdateControl::Enabled
        }
    }

    pub fn apply_read(&mut self, result: Result<String, String>) {
        match result {
            Ok(greeting) => {
                self.greeting = Some(greeting);
                self.read_error = None;
            }
            Err(e) => self.read_error = Some(e),
        }
    }

    /// A new write starts: previous write and confirmation outcomes are dropped.
    pub fn begin_write(&mut self) {
        self.is_write_pending = true;
        self.write_error = None;
        self.is_confirming = false;
        self.is_confirmed = false;
        self.confirm_error = None;
        self.transaction_hash = None;
        self.submitted_at = None;
        self.last_receipt = None;
    }

    /// Apply the submit result. Returns the hash to wait on when submitted.
    pub fn apply_write(&mut self, result: Result<String, String>) -> Option<String> {
        self.is_write_pending = false;
        match result {
            Ok(hash) => {
                self.transaction_hash = Some(hash.clone());
                self.submitted_at = Some(Local::now());
                self.is_confirming = true;
                Some(hash)
            }
            Err(e) => {
                self.write_error = Some(e);
                None
            }
        }
    }

    /// Apply a receipt result for `tx_hash`.
    ///
    /// Results for any hash other than the current one are ignored. Returns
    /// `true` only on the transition into confirmed, so callers react once per
    /// confirmed write.
    pub fn apply_receipt(&mut self, tx_hash: &str, result: Result<ReceiptInfo, String>) -> bool {
        if self.transaction_hash.as_deref() != Some(tx_hash) || !self.is_confirming {
            tracing::debug!(tx_hash = %tx_hash, "Ignoring stale receipt result");
            return false;
        }

        self.is_confirming = false;
        match result {
            Ok(receipt) => {
                self.last_receipt = Some(receipt);
                self.confirm_error = None;
                let newly_confirmed = !self.is_confirmed;
                self.is_confirmed = true;
                newly_confirmed
            }
            Err(e) => {
                self.confirm_error = Some(e);
                false
            }
        }
    }
}

/// Starts greeter reads, writes and receipt waits and reports their results.
#[derive(Clone)]
pub struct GreeterBinding {
    contract: Arc<dyn GreeterContract>,
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    scope: TaskScope,
}

impl GreeterBinding {
    pub fn new(
        contract: Arc<dyn GreeterContract>,
        state: Arc<RwLock<AppState>>,
        event_tx: Sender<AppEvent>,
        scope: TaskScope,
    ) -> Self {
        Self {
            contract,
            state,
            event_tx,
            scope,
        }
    }

    /// Force a fresh read of the greeting.
    pub fn refetch_greeting(&self) {
        let contract = Arc::clone(&self.contract);
        let tx = self.event_tx.clone();

        self.scope.spawn("greeting_read", async move {
            let result = contract.read_greeting().await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::GreetingRead(result)).await;
        });
    }

    /// Submit `setGreeting(value)` without waiting for it.
    ///
    /// The pending flag is set before returning; the submit result arrives as
    /// [`AppEvent::GreetingWritten`].
    pub fn set_greeting(&self, value: String) {
        self.state.write().greeter.begin_write();

        let contract = Arc::clone(&self.contract);
        let tx = self.event_tx.clone();

        tracing::info!(greeting = %value, "Submitting setGreeting");
        self.scope.spawn("greeting_write", async move {
            let result = contract.write_greeting(&value).await.map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::GreetingWritten(result)).await;
        });
    }

    /// Wait for the receipt of a submitted transaction.
    pub(crate) fn wait_for_confirmation(&self, tx_hash: String) {
        let contract = Arc::clone(&self.contract);
        let tx = self.event_tx.clone();

        self.scope.spawn("receipt_wait", async move {
            let result = contract
                .wait_for_receipt(&tx_hash)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::ReceiptReceived { tx_hash, result }).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";

    fn receipt() -> ReceiptInfo {
        ReceiptInfo {
            tx_hash: HASH.to_string(),
            block_number: Some(7),
            gas_used: None,
        }
    }

    fn submitted() -> GreeterState {
        let mut state = GreeterState::default();
        state.begin_write();
        state.apply_write(Ok(HASH.to_string()));
        state
    }

    #[test]
    fn test_initial_state_is_idle_and_loading() {
        let state = GreeterState::default();
        assert_eq!(state.lifecycle(), TxLifecycle::Idle);
        assert_eq!(state.greeting, None);
    }

    #[test]
    fn test_update_control_truth_table() {
        for write_pending in [false, true] {
            for confirming in [false, true] {
                for draft in ["", "   ", "Hello", "  Hello  "] {
                    let state = GreeterState {
                        is_write_pending: write_pending,
                        is_confirming: confirming,
                        ..Default::default()
                    };
                    let disabled = write_pending || confirming || draft.trim().is_empty();
                    assert_eq!(
                        !state.update_control(draft).is_enabled(),
                        disabled,
                        "pending={} confirming={} draft={:?}",
                        write_pending,
                        confirming,
                        draft
                    );
                }
            }
        }
    }

    #[test]
    fn test_write_then_confirm_lifecycle() {
        let mut state = GreeterState::default();
        state.begin_write();
        assert_eq!(state.lifecycle(), TxLifecycle::Submitting);
        assert_eq!(state.update_control("x"), UpdateControl::Disabled(DisabledReason::WritePending));

        let hash = state.apply_write(Ok(HASH.to_string()));
        assert_eq!(hash.as_deref(), Some(HASH));
        assert_eq!(state.lifecycle(), TxLifecycle::Confirming(HASH.to_string()));
        assert_eq!(state.update_control("x"), UpdateControl::Disabled(DisabledReason::Confirming));
        assert!(state.submitted_at.is_some());

        assert!(state.apply_receipt(HASH, Ok(receipt())));
        assert_eq!(state.lifecycle(), TxLifecycle::Confirmed(HASH.to_string()));
        assert!(state.update_control("x").is_enabled());
    }

    #[test]
    fn test_confirmation_reported_once() {
        let mut state = submitted();
        assert!(state.apply_receipt(HASH, Ok(receipt())));
        assert!(!state.apply_receipt(HASH, Ok(receipt())));
        assert!(state.is_confirmed);
    }

    #[test]
    fn test_stale_receipt_ignored() {
        let mut state = submitted();
        assert!(!state.apply_receipt("0xother", Ok(receipt())));
        assert!(state.is_confirming);
        assert!(!state.is_confirmed);
    }

    #[test]
    fn test_write_failure_returns_to_enabled() {
        let mut state = GreeterState::default();
        state.begin_write();
        assert_eq!(state.apply_write(Err("user rejected".to_string())), None);

        assert_eq!(state.write_error.as_deref(), Some("user rejected"));
        assert_eq!(state.lifecycle(), TxLifecycle::Failed("user rejected".to_string()));
        assert!(state.update_control("Hello").is_enabled());
    }

    #[test]
    fn test_confirm_failure_returns_to_enabled() {
        let mut state = submitted();
        assert!(!state.apply_receipt(HASH, Err("reverted".to_string())));

        assert_eq!(state.confirm_error.as_deref(), Some("reverted"));
        assert!(!state.is_confirmed);
        assert!(state.update_control("Hello").is_enabled());
    }

    #[test]
    fn test_new_write_clears_previous_outcome() {
        let mut state = submitted();
        state.apply_receipt(HASH, Ok(receipt()));

        state.begin_write();
        assert!(!state.is_confirmed);
        assert_eq!(state.transaction_hash, None);
        assert_eq!(state.confirm_error, None);
    }

    #[test]
    fn test_read_error_keeps_last_greeting() {
        let mut state = GreeterState::default();
        state.apply_read(Ok("gm".to_string()));
        state.apply_read(Err("rpc down".to_string()));

        assert_eq!(state.greeting.as_deref(), Some("gm"));
        assert_eq!(state.read_error.as_deref(), Some("rpc down"));

        state.apply_read(Ok("gn".to_string()));
        assert_eq!(state.read_error, None);
    }
}
