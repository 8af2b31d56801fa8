//! # Reusable UI Widgets
//!
//! Common widgets used by the page.

pub mod alert;
pub mod forms;
pub mod layouts;
pub mod notifications;
