//! Health check endpoints

use super::EntradaClient;
use crate::models::{HealthStatus, ReadyStatus};
use crate::utils::errors::Result;

impl EntradaClient {
    /// Liveness probe
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/health").await
    }

    /// Readiness probe, reporting backend component state
    pub async fn ready(&self) -> Result<ReadyStatus> {
        self.get_json("/ready").await
    }
}
