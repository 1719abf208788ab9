pub mod auth;
pub mod config;
pub mod error;
pub mod loader;
pub mod utils;

pub use auth::{Credentials, ParseOutcome};
