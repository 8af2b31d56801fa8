//! # dApp Configuration
//!
//! Settings are read from `./greeter-dapp.json` when it exists, then
//! individual values are overridden from the environment. A missing or
//! unreadable file is not an error: defaults are used and a warning logged.
//!
//! | Env var                     | Field |
//! |-----------------------------|-------|
//! | `DAPP_RPC_URL`              | `rpc_url` |
//! | `DAPP_CHAIN_ID`             | `required_chain` |
//! | `GREETER_CONTRACT_ADDRESS`  | `greeter_address` |
//! | `DAPP_EXPLORER_URL`         | `explorer_base_url` |
//! | `DAPP_KEY_FILE`             | `key_file` |
//! | `DAPP_ACCOUNT_POLL_SECS`    | `account_poll_secs` |
//! | `DAPP_RECEIPT_POLL_MS`      | `receipt_poll_ms` |
//! | `DAPP_RECEIPT_TIMEOUT_SECS` | `receipt_timeout_secs` |

use serde::{Deserialize, Serialize};
use shared::{ChainInfo, BASE_SEPOLIA_EXPLORER};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::core::error::{AppError, Result};

/// Default config file location
pub fn get_config_path() -> PathBuf {
    PathBuf::from("./greeter-dapp.json")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DappConfig {
    /// JSON-RPC endpoint used for reads, writes and receipt polling
    pub rpc_url: String,
    /// The only network on which the wallet and contract panels are shown
    pub required_chain: ChainInfo,
    /// Deployed greeter contract
    pub greeter_address: String,
    /// Block explorer base URL; transaction links are `<base>/tx/<hash>`
    pub explorer_base_url: String,
    /// Hex private key file used by Connect when `DAPP_PRIVATE_KEY` is unset
    pub key_file: Option<PathBuf>,
    pub account_poll_secs: u64,
    pub receipt_poll_ms: u64,
    pub receipt_timeout_secs: u64,
}

impl Default for DappConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://sepolia.base.org".to_string(),
            required_chain: ChainInfo::base_sepolia(),
            greeter_address: String::new(),
            explorer_base_url: BASE_SEPOLIA_EXPLORER.to_string(),
            key_file: None,
            account_poll_secs: 4,
            receipt_poll_ms: 1500,
            receipt_timeout_secs: 120,
        }
    }
}

impl DappConfig {
    /// Load from the default path and apply environment overrides.
    pub fn load() -> Self {
        let path = get_config_path();
        let mut config = match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded dApp configuration from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load dApp config from {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn load_from_file(path: &Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to_file(&self, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Apply overrides from a key lookup (the environment in production).
    ///
    /// Numeric values that fail to parse are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DAPP_RPC_URL") {
            self.rpc_url = url;
        }
        if let Some(id) = parse_var(&lookup, "DAPP_CHAIN_ID") {
            self.required_chain = ChainInfo::from_id(id);
        }
        if let Some(address) = lookup("GREETER_CONTRACT_ADDRESS") {
            self.greeter_address = address.trim().to_string();
        }
        if let Some(url) = lookup("DAPP_EXPLORER_URL") {
            self.explorer_base_url = url;
        }
        if let Some(path) = lookup("DAPP_KEY_FILE") {
            self.key_file = Some(PathBuf::from(path));
        }
        if let Some(secs) = parse_var(&lookup, "DAPP_ACCOUNT_POLL_SECS") {
            self.account_poll_secs = secs;
        }
        if let Some(ms) = parse_var(&lookup, "DAPP_RECEIPT_POLL_MS") {
            self.receipt_poll_ms = ms;
        }
        if let Some(secs) = parse_var(&lookup, "DAPP_RECEIPT_TIMEOUT_SECS") {
            self.receipt_timeout_secs = secs;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.trim().is_empty() {
            return Err(AppError::Config("rpc_url must not be empty".to_string()));
        }
        if self.greeter_address.is_empty() {
            return Err(AppError::Config(
                "greeter_address is not set (GREETER_CONTRACT_ADDRESS)".to_string(),
            ));
        }
        ethers::types::Address::from_str(&self.greeter_address).map_err(|e| {
            AppError::Config(format!("invalid greeter_address {}: {}", self.greeter_address, e))
        })?;
        if self.account_poll_secs == 0 || self.receipt_poll_ms == 0 || self.receipt_timeout_secs == 0 {
            return Err(AppError::Config("poll intervals and timeouts must be non-zero".to_string()));
        }
        Ok(())
    }

    pub fn account_poll_interval(&self) -> Duration {
        Duration::from_secs(self.account_poll_secs)
    }

    pub fn receipt_poll_interval(&self) -> Duration {
        Duration::from_millis(self.receipt_poll_ms)
    }

    pub fn receipt_timeout(&self) -> Duration {
        Duration::from_secs(self.receipt_timeout_secs)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key = key, value = %raw, "Ignoring unparsable config override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const GREETER: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_target_base_sepolia() {
        let config = DappConfig::default();
        assert_eq!(config.required_chain.id, shared::BASE_SEPOLIA_ID);
        assert_eq!(config.explorer_base_url, "https://sepolia.basescan.org");
        assert_eq!(config.receipt_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = DappConfig::default();
        config.apply_overrides(lookup_from(&[
            ("DAPP_RPC_URL", "http://127.0.0.1:8545"),
            ("DAPP_CHAIN_ID", "31337"),
            ("GREETER_CONTRACT_ADDRESS", GREETER),
            ("DAPP_RECEIPT_POLL_MS", "250"),
            ("DAPP_ACCOUNT_POLL_SECS", "not-a-number"),
        ]));

        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.required_chain.name, "Anvil");
        assert_eq!(config.greeter_address, GREETER);
        assert_eq!(config.receipt_poll_interval(), Duration::from_millis(250));
        assert_eq!(config.account_poll_secs, 4);
    }

    #[test]
    fn test_validate_requires_contract_address() {
        let config = DappConfig::default();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = DappConfig {
            greeter_address: "0xnot-an-address".to_string(),
            ..DappConfig::default()
        };
        assert!(config.validate().is_err());

        let config = DappConfig {
            greeter_address: GREETER.to_string(),
            ..DappConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_intervals() {
        let config = DappConfig {
            greeter_address: GREETER.to_string(),
            receipt_poll_ms: 0,
            ..DappConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: DappConfig = serde_json::from_str(
            r#"{"greeter_address": "0x5FbDB2315678afecb367f032d93F642f64180aa3"}"#,
        )
        .unwrap();
        assert_eq!(config.greeter_address, GREETER);
        assert_eq!(config.rpc_url, "https://sepolia.base.org");
        assert_eq!(config.required_chain, ChainInfo::base_sepolia());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("greeter-dapp-test-{}.json", std::process::id()));
        let config = DappConfig {
            greeter_address: GREETER.to_string(),
            receipt_timeout_secs: 30,
            ..DappConfig::default()
        };
        config.save_to_file(&path).unwrap();
        let loaded = DappConfig::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }
}
