//! # Shared Utility Functions
//!
//! Display helpers used by the desktop page.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `0x1234…abcd` form used in the header
//!
//! ## Balance Formatting
//!
//! - [`format_balance`] - Four-decimal balance with currency symbol
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, format_balance};
//!
//! let address = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
//! assert_eq!(format_address(address, 6, 4), "0x5FbD...0aa3");
//! assert_eq!(format_balance("0.123456789", "ETH").as_deref(), Some("0.1235 ETH"));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
/// assert_eq!(format_address(addr, 6, 4), "0x5FbD...0aa3");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an EVM address as `0x` plus four characters on each side.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Format a decimal balance string to four decimal places followed by its symbol.
///
/// The parsed value is rounded half away from zero, so an exact tie such as
/// `0.03125` shows as `0.0313`. Values that only look like a tie in decimal
/// (`0.00015` parses just below it) round down.
///
/// Returns `None` when `formatted` is empty or not a finite number; callers keep
/// whatever they displayed before.
///
/// ```rust
/// use shared::utils::format_balance;
///
/// assert_eq!(format_balance("1", "ETH").as_deref(), Some("1.0000 ETH"));
/// assert_eq!(format_balance("", "ETH"), None);
/// ```
pub fn format_balance(formatted: &str, symbol: &str) -> Option<String> {
    let value: f64 = formatted.trim().parse().ok()?;
    let rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
    Some(format!("{:.4} {}", rounded, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 6, 4), "0x5FbD...0aa3");
        assert_eq!(format_address(ADDR, 4, 2), "0x5F...a3");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("0x", 4, 4), "0x");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "0x5FbD...0aa3");
    }

    #[test]
    fn test_format_balance_rounds_to_four_places() {
        assert_eq!(format_balance("0.123456789", "ETH").as_deref(), Some("0.1235 ETH"));
        assert_eq!(format_balance("12.00004", "POL").as_deref(), Some("12.0000 POL"));
        assert_eq!(format_balance("0.0", "ETH").as_deref(), Some("0.0000 ETH"));
    }

    #[test]
    fn test_format_balance_rounds_ties_up() {
        assert_eq!(format_balance("0.03125", "ETH").as_deref(), Some("0.0313 ETH"));
        assert_eq!(format_balance("0.00015", "ETH").as_deref(), Some("0.0001 ETH"));
    }

    #[test]
    fn test_format_balance_rejects_garbage() {
        assert_eq!(format_balance("", "ETH"), None);
        assert_eq!(format_balance("abc", "ETH"), None);
        assert_eq!(format_balance("inf", "ETH"), None);
        assert_eq!(format_balance("NaN", "ETH"), None);
    }
}
