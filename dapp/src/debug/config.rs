//! Logging configuration from environment variables

use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log level filter (e.g., "dapp=debug,info")
    pub log_level: String,
    /// Log directory (daily rotation)
    pub log_dir: PathBuf,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "dapp=info,warn".to_string(),
            log_dir: PathBuf::from("logs"),
            log_to_stderr: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_dir: std::env::var("DAPP_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_to_stderr: std::env::var("DAPP_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    /// Current log file name prefix (rotation appends the date)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join("dapp.log")
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
