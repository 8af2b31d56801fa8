//! # Event Handlers
//!
//! User action handlers organized by panel.

pub mod greeting;
pub mod signing;
pub mod wallet;
