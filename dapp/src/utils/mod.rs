//! # Utility Functions
//!
//! ## Modules
//!
//! - **[`runtime`]**: Process-wide Tokio runtime for RPC work
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Address and balance formatting
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
