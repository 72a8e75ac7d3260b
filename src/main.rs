//! Entrada API client
//!
//! Smoke-check entry point: loads configuration, probes the backend's
//! health endpoints, and lists the first page of events.

use tracing::{error, info};

use entrada_client::{
    config::Settings,
    models::EventFilters,
    utils::logging,
    EntradaClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting Entrada API smoke check...");
    info!("Backend base URL: {}", settings.api.base_url);

    let client = EntradaClient::new(&settings)?;

    let health = client.health().await?;
    info!(status = %health.status, service = %health.service, "Health check passed");

    let ready = client.ready().await?;
    if !ready.is_ready() {
        error!(status = %ready.status, error = ?ready.error, "Backend is not ready");
        return Err("backend not ready".into());
    }
    info!(
        database = ?ready.database,
        redis = ?ready.redis,
        "Readiness check passed"
    );

    let filters = EventFilters {
        limit: Some(10),
        ..Default::default()
    };
    let events = client.list_events(&filters).await?;
    info!(count = events.len(), "Fetched first page of events");

    for event in &events {
        info!(
            event_id = %event.id,
            name = %event.name,
            starts_at = %event.starts_at,
            available = event.capacity_available,
            "Event"
        );
    }

    info!("Entrada API smoke check completed.");
    Ok(())
}
