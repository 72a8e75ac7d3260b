//! Error handling for the Entrada API client
//!
//! This module defines the main error types used throughout the crate
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Entrada client
#[derive(Error, Debug)]
pub enum EntradaError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failures reported by the Entrada backend or the transport underneath it
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API returned HTTP {status}: {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("API request timed out")]
    Timeout,

    #[error("API unreachable")]
    ServiceUnavailable,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for Entrada client operations
pub type Result<T> = std::result::Result<T, EntradaError>;

impl EntradaError {
    /// Check if the error is recoverable by retrying the call
    pub fn is_recoverable(&self) -> bool {
        match self {
            EntradaError::Api(api) => api.is_recoverable(),
            EntradaError::Http(_) => true,
            EntradaError::Serialization(_) => false,
            EntradaError::Config(_) => false,
            EntradaError::UrlParse(_) => false,
            EntradaError::InvalidInput(_) => false,
        }
    }

    /// HTTP status carried by the error, if the backend produced one
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            EntradaError::Api(ApiError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

impl ApiError {
    /// Check if the error is recoverable by retrying the call
    pub fn is_recoverable(&self) -> bool {
        match self {
            ApiError::Status { status, .. } => status.is_server_error(),
            ApiError::Timeout => true,
            ApiError::ServiceUnavailable => true,
            ApiError::InvalidResponse(_) => false,
        }
    }
}
