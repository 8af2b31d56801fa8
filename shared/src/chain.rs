//! # Chain Identities
//!
//! Network identities the dApp knows how to name, plus block-explorer links.
//!
//! The page only ever compares chain **ids**; names and native currency symbols
//! exist for display. Unknown ids still produce a usable [`ChainInfo`] so the
//! network banner can show "Current: Chain 1234".

use serde::{Deserialize, Serialize};

/// Chain id of Base Sepolia, the default required network.
pub const BASE_SEPOLIA_ID: u64 = 84532;

/// Default block explorer for Base Sepolia.
pub const BASE_SEPOLIA_EXPLORER: &str = "https://sepolia.basescan.org";

/// (id, name, native symbol)
const KNOWN_CHAINS: &[(u64, &str, &str)] = &[
    (1, "Ethereum", "ETH"),
    (10, "OP Mainnet", "ETH"),
    (8453, "Base", "ETH"),
    (BASE_SEPOLIA_ID, "Base Sepolia", "ETH"),
    (11155111, "Sepolia", "ETH"),
    (80002, "Polygon Amoy", "POL"),
    (31337, "Anvil", "ETH"),
];

/// A network the wallet can be connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    /// EIP-155 chain id
    pub id: u64,
    /// Human-readable network name
    pub name: String,
    /// Native currency symbol used for balances
    pub native_symbol: String,
}

impl ChainInfo {
    pub fn new(id: u64, name: impl Into<String>, native_symbol: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            native_symbol: native_symbol.into(),
        }
    }

    /// Base Sepolia test network.
    pub fn base_sepolia() -> Self {
        Self::new(BASE_SEPOLIA_ID, "Base Sepolia", "ETH")
    }

    /// Look up a chain in the known-chains table.
    pub fn lookup(id: u64) -> Option<Self> {
        KNOWN_CHAINS
            .iter()
            .find(|(known, _, _)| *known == id)
            .map(|(id, name, symbol)| Self::new(*id, *name, *symbol))
    }

    /// Known chain, or a generic "Chain <id>" entry with an ETH symbol.
    pub fn from_id(id: u64) -> Self {
        Self::lookup(id).unwrap_or_else(|| Self::new(id, format!("Chain {}", id), "ETH"))
    }
}

impl Default for ChainInfo {
    fn default() -> Self {
        Self::base_sepolia()
    }
}

/// Build an explorer link for a transaction hash.
///
/// ```rust
/// use shared::chain::explorer_tx_url;
///
/// assert_eq!(
///     explorer_tx_url("https://sepolia.basescan.org/", "0xabc"),
///     "https://sepolia.basescan.org/tx/0xabc"
/// );
/// ```
pub fn explorer_tx_url(explorer_base: &str, tx_hash: &str) -> String {
    format!("{}/tx/{}", explorer_base.trim_end_matches('/'), tx_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_chain() {
        let chain = ChainInfo::lookup(BASE_SEPOLIA_ID).unwrap();
        assert_eq!(chain.name, "Base Sepolia");
        assert_eq!(chain.native_symbol, "ETH");
        assert_eq!(chain, ChainInfo::base_sepolia());
    }

    #[test]
    fn test_unknown_chain_gets_generic_name() {
        assert!(ChainInfo::lookup(424242).is_none());
        let chain = ChainInfo::from_id(424242);
        assert_eq!(chain.id, 424242);
        assert_eq!(chain.name, "Chain 424242");
    }

    #[test]
    fn test_explorer_url_without_trailing_slash() {
        assert_eq!(
            explorer_tx_url(BASE_SEPOLIA_EXPLORER, "0x01"),
            "https://sepolia.basescan.org/tx/0x01"
        );
    }

    #[test]
    fn test_chain_info_json_shape() {
        let chain: ChainInfo = serde_json::from_str(
            r#"{"id": 80002, "name": "Polygon Amoy", "native_symbol": "POL"}"#,
        )
        .unwrap();
        assert_eq!(chain, ChainInfo::lookup(80002).unwrap());
    }
}
