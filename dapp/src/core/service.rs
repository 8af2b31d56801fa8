//! # Service Traits
//!
//! Seams between the page logic and the chain libraries.
//!
//! The page never talks to `ethers` directly. It holds an
//! `Arc<dyn WalletProvider>` and an `Arc<dyn GreeterContract>`; production code
//! plugs in [`crate::services::wallet::EthWallet`] and
//! [`crate::services::greeter::GreeterClient`], tests plug in mocks.

use async_trait::async_trait;
use shared::ChainInfo;

use crate::services::greeter::{ContractError, ReceiptInfo};
use crate::services::wallet::{BalanceData, WalletError};

/// Wallet capabilities consumed by the page.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Checksummed `0x` address of the connected account.
    fn address(&self) -> String;

    /// Chain the wallet's RPC endpoint is currently on.
    async fn chain(&self) -> Result<ChainInfo, WalletError>;

    /// Native balance of the connected account.
    async fn balance(&self) -> Result<BalanceData, WalletError>;

    /// Sign an arbitrary message (EIP-191 personal sign), returning `0x` hex.
    async fn sign_message(&self, message: &str) -> Result<String, WalletError>;
}

/// The three primitives the greeter binding is built on.
#[async_trait]
pub trait GreeterContract: Send + Sync {
    /// Call `greet()`.
    async fn read_greeting(&self) -> Result<String, ContractError>;

    /// Send `setGreeting(value)` and return the transaction hash once submitted.
    async fn write_greeting(&self, value: &str) -> Result<String, ContractError>;

    /// Wait until the transaction's receipt is available.
    ///
    /// A reverted receipt or an expired wait is an error.
    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<ReceiptInfo, ContractError>;
}
