//! # Shared Chain and Display Types
//!
//! Types and helpers that do not depend on any wallet or GUI library, so they
//! can be used by the desktop page and by any future front end.
//!
//! ## Structure
//!
//! - **[`chain`]**: Network identities and explorer links
//!   - **[`chain::ChainInfo`]**: Chain id, name and native currency symbol
//!   - **[`chain::explorer_tx_url`]**: Link to a transaction on the block explorer
//! - **[`utils`]**: Display formatting
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::format_balance`]**: Four-decimal balances with their symbol
//!
//! ## Wire Format
//!
//! [`chain::ChainInfo`] serializes with `serde` using snake_case field names, which
//! is the shape used in the `required_chain` section of the dApp config file.

pub mod chain;
pub mod utils;

pub use chain::*;
pub use utils::*;
