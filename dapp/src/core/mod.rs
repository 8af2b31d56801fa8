//! # Core Abstractions
//!
//! Error types and the service traits the page is written against.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`WalletProvider`, `GreeterContract`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dapp::core::service::{GreeterContract, WalletProvider};
//!
//! // In production: ethers-backed implementations
//! let wallet: Arc<dyn WalletProvider> = Arc::new(eth_wallet);
//! let greeter: Arc<dyn GreeterContract> = Arc::new(greeter_client);
//!
//! // In tests: mocks that count calls
//! let wallet: Arc<dyn WalletProvider> = Arc::new(MockWallet::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{GreeterContract, WalletProvider};
