//! # Logging and Task Tracing
//!
//! - **File-based logging**: Structured logs to `logs/dapp.log.<date>` (daily rotation)
//! - **Async task tracking**: Every background RPC call is spawned through
//!   [`spawn_tracked`] so its lifetime shows up in the log
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `dapp=debug,info`)
//! - `DAPP_LOG_DIR`: Log directory (default: `logs`)
//! - `DAPP_LOG_STDERR`: Also log to stderr (1=on)

pub mod config;
pub mod logger;
pub mod task_tracker;

pub use config::DebugConfig;
pub use logger::init as init_logger;
pub use task_tracker::spawn_tracked;

/// Initialize logging. Call once at startup, before any other operation.
pub fn init() {
    init_logger();
}
