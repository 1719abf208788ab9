//! Error handling
//!
//! Defines error types and handling for credential parsing and loading.

pub mod handlers;
pub mod types;

pub use types::*;
