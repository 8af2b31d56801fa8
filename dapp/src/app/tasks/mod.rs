//! # Async Tasks
//!
//! Background work not owned by the greeter binding.

pub mod account;
