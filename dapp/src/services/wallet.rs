//! # Wallet Service
//!
//! Local-key EVM wallet: loads a private key, signs messages and queries the
//! connected account's chain and native balance over JSON-RPC.
//!
//! ## Features
//! - Load key from `DAPP_PRIVATE_KEY` or a hex key file
//! - EIP-191 message signing
//! - Native balance in ether units with the chain's currency symbol
//! - Chain id query (drives the network gate)

use async_trait::async_trait;
use ethers::prelude::*;
use ethers::utils::{format_ether, to_checksum};
use shared::ChainInfo;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::core::service::WalletProvider;

/// Wallet errors
#[derive(Debug, Error)]
pub enum WalletError {
    /// No key configured or key file unreadable
    #[error("Key load error: {0}")]
    KeyLoad(String),
    /// Key material is not a valid secp256k1 private key
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    /// RPC endpoint unreachable or returned an error
    #[error("RPC error: {0}")]
    Rpc(String),
    /// Message signing failed
    #[error("Signing error: {0}")]
    Signing(String),
    /// Balance query failed
    #[error("Balance error: {0}")]
    Balance(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Native balance as returned by the chain, before display rounding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceData {
    /// Decimal string in ether units (e.g. `"0.012345678901234567"`)
    pub formatted: String,
    /// Currency symbol of the chain (e.g. `"ETH"`)
    pub symbol: String,
}

/// Wallet backed by a local private key and an HTTP provider.
#[derive(Debug, Clone)]
pub struct EthWallet {
    signer: LocalWallet,
    provider: Provider<Http>,
}

impl EthWallet {
    /// Build a wallet from a hex private key.
    ///
    /// `chain_id` is used for EIP-155 transaction signing; it should be the
    /// required network, since writes are only offered there.
    pub fn from_private_key(rpc_url: &str, private_key: &str, chain_id: u64) -> Result<Self, WalletError> {
        let signer = private_key
            .trim()
            .parse::<LocalWallet>()
            .map_err(|e| WalletError::InvalidKey(e.to_string()))?;
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| WalletError::Rpc(format!("Invalid RPC URL {}: {}", rpc_url, e)))?;

        Ok(Self {
            signer: signer.with_chain_id(chain_id),
            provider,
        })
    }

    /// Read a hex private key from a file (surrounding whitespace ignored).
    pub fn load_key_file<P: AsRef<Path>>(path: P) -> Result<String, WalletError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| WalletError::KeyLoad(format!("Failed to read {}: {}", path.display(), e)))?;
        let key = contents.trim().to_string();
        if key.is_empty() {
            return Err(WalletError::KeyLoad(format!("{} is empty", path.display())));
        }
        Ok(key)
    }

    /// Resolve the private key: `DAPP_PRIVATE_KEY` first, then the key file.
    pub fn resolve_private_key(key_file: Option<&Path>) -> Result<String, WalletError> {
        if let Ok(key) = std::env::var("DAPP_PRIVATE_KEY") {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }
        match key_file {
            Some(path) => Self::load_key_file(path),
            None => Err(WalletError::KeyLoad(
                "Set DAPP_PRIVATE_KEY or DAPP_KEY_FILE to connect a wallet".to_string(),
            )),
        }
    }

    pub fn signer(&self) -> &LocalWallet {
        &self.signer
    }

    pub fn provider(&self) -> &Provider<Http> {
        &self.provider
    }
}

#[async_trait]
impl WalletProvider for EthWallet {
    fn address(&self) -> String {
        to_checksum(&self.signer.address(), None)
    }

    async fn chain(&self) -> Result<ChainInfo, WalletError> {
        let id = self
            .provider
            .get_chainid()
            .await
            .map_err(|e| WalletError::Rpc(format!("Failed to get chain id: {}", e)))?;
        Ok(ChainInfo::from_id(id.as_u64()))
    }

    async fn balance(&self) -> Result<BalanceData, WalletError> {
        let chain = self.chain().await?;
        let wei = self
            .provider
            .get_balance(self.signer.address(), None)
            .await
            .map_err(|e| WalletError::Balance(format!("Failed to get balance: {}", e)))?;

        Ok(BalanceData {
            formatted: format_ether(wei),
            symbol: chain.native_symbol,
        })
    }

    async fn sign_message(&self, message: &str) -> Result<String, WalletError> {
        let signature = self
            .signer
            .sign_message(message)
            .await
            .map_err(|e| WalletError::Signing(e.to_string()))?;
        Ok(format!("0x{}", signature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil's first dev account
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_wallet_from_private_key() {
        let wallet = EthWallet::from_private_key("http://127.0.0.1:8545", DEV_KEY, 84532).unwrap();
        assert_eq!(wallet.address(), DEV_ADDRESS);
        assert_eq!(wallet.signer().chain_id(), 84532);
    }

    #[test]
    fn test_key_without_prefix_is_accepted() {
        let wallet =
            EthWallet::from_private_key("http://127.0.0.1:8545", DEV_KEY.trim_start_matches("0x"), 1).unwrap();
        assert_eq!(wallet.address(), DEV_ADDRESS);
    }

    #[test]
    fn test_invalid_key_rejected() {
        let err = EthWallet::from_private_key("http://127.0.0.1:8545", "0x1234", 1).unwrap_err();
        assert!(matches!(err, WalletError::InvalidKey(_)));
    }

    #[test]
    fn test_load_key_file() {
        let path = std::env::temp_dir().join(format!("dapp-key-{}.txt", std::process::id()));
        fs::write(&path, format!("  {}\n", DEV_KEY)).unwrap();
        let key = EthWallet::load_key_file(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(key, DEV_KEY);
    }

    #[test]
    fn test_missing_key_file() {
        let err = EthWallet::load_key_file("/definitely/not/here.key").unwrap_err();
        assert!(matches!(err, WalletError::KeyLoad(_)));
    }

    #[tokio::test]
    async fn test_sign_message_is_hex_signature() {
        let wallet = EthWallet::from_private_key("http://127.0.0.1:8545", DEV_KEY, 84532).unwrap();
        let signature = wallet.sign_message("hello").await.unwrap();

        assert!(signature.starts_with("0x"));
        // 65 bytes r || s || v
        assert_eq!(signature.len(), 2 + 130);

        let parsed: Signature = signature.parse().unwrap();
        let recovered = parsed.recover("hello").unwrap();
        assert_eq!(recovered, wallet.signer().address());
    }
}
