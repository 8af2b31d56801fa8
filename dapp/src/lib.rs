//! # Greeter dApp - Library Root
//!
//! A **native desktop** front end for a greeter contract on an EVM test
//! network. One page shows the connected wallet and its balance, signs
//! arbitrary messages, and reads and updates the contract's greeting.
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dapp (this crate)                         │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI + native window    │
//! │  egui-notify   - Toasts                                │
//! │  Tokio         - Async runtime                         │
//! │  ethers        - Local signer, JSON-RPC, abigen!       │
//! └────────────────────────────────────────────────────────┘
//!                         │
//!                         │ JSON-RPC over HTTP
//!                         ▼
//!              ┌─────────────────────────┐
//!              │   Base Sepolia (84532)  │
//!              └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Page state, greeter binding, event handling
//! - **config**: `greeter-dapp.json` + environment overrides
//! - **core**: Error types and the wallet/contract service traits
//! - **debug**: Logging and tracked task spawning
//! - **services**: `ethers`-backed wallet and contract clients
//! - **ui**: egui rendering and the eframe host
//! - **utils**: Process-wide Tokio runtime
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers)
//!   │   └── core::service traits
//!   │         ├── services::wallet  (EthWallet)
//!   │         └── services::greeter (GreeterClient)
//!   │
//!   └── ui (page, widgets, theme)
//! ```
//!
//! ## Core Concepts
//!
//! Async tasks never touch the UI. They send an [`AppEvent`] through an
//! unbounded `async_channel`; the main thread applies events one at a time in
//! [`App::on_tick`]. State lives in `Arc<RwLock<AppState>>` and locks are held
//! only while reading a snapshot or applying one result.
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p dapp
//! ```
//!
//! App-level tests use mock [`core::service::WalletProvider`] and
//! [`core::service::GreeterContract`] implementations, so no network is needed.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState};
pub use config::DappConfig;
pub use core::{AppError, Result};
