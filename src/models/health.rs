//! Health check models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Readiness report; component fields are filled in when the backend
/// reaches them, `error` when it does not
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub redis: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ReadyStatus {
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
