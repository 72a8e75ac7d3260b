//! Configuration validation module
//!
//! This module provides validation functions for client configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{EntradaError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(EntradaError::Config(
            "API base URL is required".to_string(),
        ));
    }

    let parsed = url::Url::parse(&config.base_url)
        .map_err(|e| EntradaError::Config(format!("Invalid API base URL: {}", e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(EntradaError::Config(format!(
            "API base URL must be http or https, got: {}",
            parsed.scheme()
        )));
    }

    if config.timeout_seconds == 0 {
        return Err(EntradaError::Config(
            "API timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EntradaError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EntradaError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
