//! # Application State Types
//!
//! Everything the page renders is derived from [`AppState`]. Async results land
//! in exactly one place each: account snapshots in [`AccountState`], signatures
//! in [`SigningState`], contract results in [`GreeterState`].

use shared::{format_balance, ChainInfo};
use std::collections::VecDeque;
use std::time::Instant;

use crate::app::greeter::{GreeterState, UpdateControl};
use crate::services::wallet::BalanceData;

/// Message shown when the user tries to sign an empty message.
pub const EMPTY_MESSAGE_ALERT: &str = "Enter a message to sign!";

/// Result of one account refresh: the chain the wallet is on and its balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub chain: ChainInfo,
    pub balance: BalanceData,
}

/// Connected account as last reported by the wallet provider.
#[derive(Debug, Clone, Default)]
pub struct AccountState {
    /// Checksummed address; `None` while disconnected
    pub address: Option<String>,
    /// Active chain; `None` until the first refresh completes
    pub chain: Option<ChainInfo>,
    /// Last successfully parsed balance
    pub balance: Option<BalanceData>,
    /// A refresh task is in flight
    pub refreshing: bool,
    pub last_refresh: Option<Instant>,
    /// Error from the most recent refresh, cleared on success
    pub error: Option<String>,
}

impl AccountState {
    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Balance as displayed: four decimals and the currency symbol.
    pub fn balance_display(&self) -> Option<String> {
        self.balance
            .as_ref()
            .and_then(|b| format_balance(&b.formatted, &b.symbol))
    }

    /// Apply a refresh result.
    ///
    /// The chain is replaced whenever it differs. A balance whose formatted
    /// value cannot be parsed leaves the previous balance in place.
    pub fn apply_snapshot(&mut self, snapshot: AccountSnapshot) {
        if self.chain.as_ref() != Some(&snapshot.chain) {
            tracing::info!(
                chain_id = snapshot.chain.id,
                chain = %snapshot.chain.name,
                "Active chain changed"
            );
            self.chain = Some(snapshot.chain);
        }

        if format_balance(&snapshot.balance.formatted, &snapshot.balance.symbol).is_some() {
            self.balance = Some(snapshot.balance);
        } else {
            tracing::warn!(
                formatted = %snapshot.balance.formatted,
                "Ignoring unparsable balance"
            );
        }
        self.error = None;
    }
}

/// Message signing panel state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningState {
    pub is_signing: bool,
    /// Last returned signature; kept until the next one arrives
    pub signature: Option<String>,
    pub error: Option<String>,
}

/// Text the user is editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDrafts {
    /// Message to sign
    pub message: String,
    /// Pending new greeting
    pub new_greeting: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Toast waiting to be shown by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// What the content area shows, derived from connection and network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    /// No wallet: connect prompt only
    Disconnected,
    /// Connected to the wrong chain: banner only
    WrongNetwork {
        current: Option<String>,
        required: String,
    },
    /// Wallet overview, signing and greeter panels
    Ready,
}

/// Whole-page state
#[derive(Debug, Clone)]
pub struct AppState {
    pub account: AccountState,
    pub signing: SigningState,
    pub greeter: GreeterState,
    pub drafts: PageDrafts,
    /// Network the panels require
    pub required_chain: ChainInfo,
    /// Explorer base URL for transaction links
    pub explorer_base_url: String,
    /// Blocking alerts; the UI shows the front one modally until dismissed
    pub alerts: VecDeque<String>,
    pub pending_notifications: Vec<Notification>,
    /// Connect in progress
    pub connecting: bool,
}

impl AppState {
    pub fn new(required_chain: ChainInfo, explorer_base_url: impl Into<String>) -> Self {
        Self {
            account: AccountState::default(),
            signing: SigningState::default(),
            greeter: GreeterState::default(),
            drafts: PageDrafts::default(),
            required_chain,
            explorer_base_url: explorer_base_url.into(),
            alerts: VecDeque::new(),
            pending_notifications: Vec::new(),
            connecting: false,
        }
    }

    /// Network gate: the active chain is the required chain.
    pub fn is_correct_network(&self) -> bool {
        self.account
            .chain
            .as_ref()
            .is_some_and(|chain| chain.id == self.required_chain.id)
    }

    pub fn page_view(&self) -> PageView {
        if !self.account.is_connected() {
            PageView::Disconnected
        } else if !self.is_correct_network() {
            PageView::WrongNetwork {
                current: self.account.chain.as_ref().map(|c| c.name.clone()),
                required: self.required_chain.name.clone(),
            }
        } else {
            PageView::Ready
        }
    }

    /// Greeting update button state for the current draft.
    pub fn update_control(&self) -> UpdateControl {
        self.greeter.update_control(&self.drafts.new_greeting)
    }

    /// Explorer link for the last submitted transaction.
    pub fn transaction_url(&self) -> Option<String> {
        self.greeter
            .transaction_hash
            .as_deref()
            .map(|hash| shared::explorer_tx_url(&self.explorer_base_url, hash))
    }

    pub fn raise_alert(&mut self, message: impl Into<String>) {
        self.alerts.push_back(message.into());
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push(Notification {
            level,
            message: message.into(),
        });
    }

    /// Forget everything tied to the wallet session.
    pub fn reset_session(&mut self) {
        self.account = AccountState::default();
        self.signing = SigningState::default();
        self.greeter = GreeterState::default();
        self.drafts = PageDrafts::default();
        self.connecting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(formatted: &str) -> BalanceData {
        BalanceData {
            formatted: formatted.to_string(),
            symbol: "ETH".to_string(),
        }
    }

    fn connected_state(chain_id: u64) -> AppState {
        let mut state = AppState::new(ChainInfo::base_sepolia(), "https://sepolia.basescan.org");
        state.account.address = Some("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string());
        state.account.apply_snapshot(AccountSnapshot {
            chain: ChainInfo::from_id(chain_id),
            balance: balance("1.5"),
        });
        state
    }

    #[test]
    fn test_no_balance_until_first_snapshot() {
        let account = AccountState::default();
        assert_eq!(account.balance_display(), None);
    }

    #[test]
    fn test_balance_display_rounds_to_four_decimals() {
        let mut account = AccountState::default();
        for (raw, shown) in [
            ("0.000049999", "0.0000 ETH"),
            ("0.00005", "0.0001 ETH"),
            ("3.14159265", "3.1416 ETH"),
            ("1000", "1000.0000 ETH"),
            ("0.03125", "0.0313 ETH"),
        ] {
            account.apply_snapshot(AccountSnapshot {
                chain: ChainInfo::base_sepolia(),
                balance: balance(raw),
            });
            assert_eq!(account.balance_display().as_deref(), Some(shown), "raw {}", raw);
        }
    }

    #[test]
    fn test_unparsable_balance_keeps_previous() {
        let mut account = AccountState::default();
        account.apply_snapshot(AccountSnapshot {
            chain: ChainInfo::base_sepolia(),
            balance: balance("2"),
        });
        account.apply_snapshot(AccountSnapshot {
            chain: ChainInfo::base_sepolia(),
            balance: balance(""),
        });
        assert_eq!(account.balance_display().as_deref(), Some("2.0000 ETH"));
    }

    #[test]
    fn test_network_gate() {
        let state = connected_state(shared::BASE_SEPOLIA_ID);
        assert!(state.is_correct_network());
        assert_eq!(state.page_view(), PageView::Ready);

        let state = connected_state(1);
        assert!(!state.is_correct_network());
        assert_eq!(
            state.page_view(),
            PageView::WrongNetwork {
                current: Some("Ethereum".to_string()),
                required: "Base Sepolia".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_chain_before_first_refresh() {
        let mut state = AppState::new(ChainInfo::base_sepolia(), "https://sepolia.basescan.org");
        assert_eq!(state.page_view(), PageView::Disconnected);

        state.account.address = Some("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string());
        assert!(!state.is_correct_network());
        assert_eq!(
            state.page_view(),
            PageView::WrongNetwork {
                current: None,
                required: "Base Sepolia".to_string(),
            }
        );
    }

    #[test]
    fn test_transaction_url() {
        let mut state = connected_state(shared::BASE_SEPOLIA_ID);
        assert_eq!(state.transaction_url(), None);

        state.greeter.transaction_hash = Some("0xabc".to_string());
        assert_eq!(
            state.transaction_url().as_deref(),
            Some("https://sepolia.basescan.org/tx/0xabc")
        );
    }

    #[test]
    fn test_reset_session_clears_wallet_data() {
        let mut state = connected_state(shared::BASE_SEPOLIA_ID);
        state.drafts.message = "hi".to_string();
        state.signing.signature = Some("0x01".to_string());

        state.reset_session();

        assert!(!state.account.is_connected());
        assert_eq!(state.signing, SigningState::default());
        assert_eq!(state.drafts, PageDrafts::default());
        assert_eq!(state.required_chain, ChainInfo::base_sepolia());
    }
}
