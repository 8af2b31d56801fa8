//! # Services Module
//!
//! Chain integrations behind the traits in [`crate::core::service`].
//!
//! ```text
//! services/
//! ├── wallet.rs    - EthWallet: local key, personal sign, chain id, balance
//! └── greeter.rs   - GreeterClient: abigen! bindings, setGreeting, receipt polling
//! ```
//!
//! ```text
//! ┌──────────────────┐       ┌──────────────────┐
//! │  EthWallet       │       │  GreeterClient   │
//! │  (wallet.rs)     │◀──────│  (greeter.rs)    │
//! └────────┬─────────┘ signs └────────┬─────────┘
//!          │                          │
//!          │ JSON-RPC over HTTP       │ eth_call / eth_sendRawTransaction
//!          ▼                          ▼
//! ┌─────────────────────────────────────────────┐
//! │     EVM network (Base Sepolia by default)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Both services return their own `thiserror` error types; the app layer turns
//! them into strings when they cross the event channel.

pub mod greeter;
pub mod wallet;

pub use greeter::{ContractError, GreeterClient, ReceiptInfo};
pub use wallet::{BalanceData, EthWallet, WalletError};
