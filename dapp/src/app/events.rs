//! # Application Events
//!
//! Results of background tasks, sent to the main thread and applied in
//! `App::on_tick`.

use crate::app::state::AccountSnapshot;
use crate::services::greeter::ReceiptInfo;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Chain and balance refreshed
    AccountRefreshed(Result<AccountSnapshot, String>),
    /// Message signing finished
    MessageSigned(Result<String, String>),
    /// `greet()` returned
    GreetingRead(Result<String, String>),
    /// `setGreeting` submitted (Ok carries the transaction hash)
    GreetingWritten(Result<String, String>),
    /// Receipt wait for `tx_hash` finished
    ReceiptReceived {
        tx_hash: String,
        result: Result<ReceiptInfo, String>,
    },
}
