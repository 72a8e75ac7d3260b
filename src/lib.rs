//! Entrada API client
//!
//! A typed HTTP client for the Entrada ticketing platform. This crate
//! provides the wire-format data shapes (events, attendees, tickets,
//! purchases) and thin wrapper methods that issue requests to the backend,
//! attach a bearer token when one is configured, and parse JSON responses.
//!
//! All business rules (capacity accounting, payment processing, QR
//! validation) live in the backend; the client is deliberately stateless
//! glue.

pub mod client;
pub mod config;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use client::EntradaClient;
pub use config::Settings;
pub use utils::errors::{ApiError, EntradaError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
