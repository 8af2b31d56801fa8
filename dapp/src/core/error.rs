//! # Common Error Types
//!
//! Consolidated error handling for the dApp.
//!
//! ## Error Categories
//!
//! - **Wallet**: key loading, signing, balance and chain queries
//! - **Contract**: greeting reads, writes and receipt waits
//! - **Config**: invalid or missing configuration values
//! - **State**: operations attempted in the wrong application state
//!
//! ## Error Conversion
//!
//! - `WalletError` → `AppError::Wallet`
//! - `ContractError` → `AppError::Contract`
//!
//! Results that cross the event channel are flattened to `Result<T, String>`,
//! so the variants here mostly matter at startup and at service boundaries.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Wallet operation failed (key load, signing, balance, chain id).
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Greeter contract call failed.
    #[error("Contract error: {0}")]
    Contract(String),

    /// Configuration is missing or invalid.
    ///
    /// ```rust
    /// use dapp::core::error::AppError;
    ///
    /// let err = AppError::Config("greeter_address is not set".to_string());
    /// assert_eq!(err.to_string(), "Config error: greeter_address is not set");
    /// ```
    #[error("Config error: {0}")]
    Config(String),

    /// Operation not possible in the current state (e.g. no wallet connected).
    #[error("State error: {0}")]
    State(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<crate::services::wallet::WalletError> for AppError {
    fn from(err: crate::services::wallet::WalletError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<crate::services::greeter::ContractError> for AppError {
    fn from(err: crate::services::greeter::ContractError) -> Self {
        AppError::Contract(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::greeter::ContractError;
    use crate::services::wallet::WalletError;

    #[test]
    fn test_wallet_error_conversion() {
        let err: AppError = WalletError::Signing("user rejected".to_string()).into();
        assert!(matches!(err, AppError::Wallet(_)));
        assert_eq!(err.to_string(), "Wallet error: Signing error: user rejected");
    }

    #[test]
    fn test_state_error_message() {
        let err = AppError::State("No wallet connected".to_string());
        assert_eq!(err.to_string(), "State error: No wallet connected");
    }

    #[test]
    fn test_contract_error_conversion() {
        let err: AppError = ContractError::Timeout(120).into();
        assert_eq!(
            err.to_string(),
            "Contract error: Timed out after 120s waiting for receipt"
        );
    }
}
