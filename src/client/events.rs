//! Event endpoints

use reqwest::Method;
use uuid::Uuid;

use super::EntradaClient;
use crate::models::{Event, EventCreate, EventFilters, EventUpdate};
use crate::utils::errors::Result;

impl EntradaClient {
    /// List events, optionally narrowed by filters
    pub async fn list_events(&self, filters: &EventFilters) -> Result<Vec<Event>> {
        let path = match filters.to_query_string() {
            Some(query) => format!("/api/v1/events?{}", query),
            None => "/api/v1/events".to_string(),
        };
        self.get_json(&path).await
    }

    /// Fetch a single event by id
    pub async fn get_event(&self, event_id: Uuid) -> Result<Event> {
        self.get_json(&format!("/api/v1/events/{}", event_id)).await
    }

    /// Create an event (organizer only)
    pub async fn create_event(&self, event: &EventCreate) -> Result<Event> {
        self.send_json(Method::POST, "/api/v1/events", event).await
    }

    /// Partially update an event (organizer only)
    pub async fn update_event(&self, event_id: Uuid, update: &EventUpdate) -> Result<Event> {
        self.send_json(Method::PUT, &format!("/api/v1/events/{}", event_id), update)
            .await
    }

    /// Delete an event (organizer only)
    pub async fn delete_event(&self, event_id: Uuid) -> Result<()> {
        self.delete_empty(&format!("/api/v1/events/{}", event_id))
            .await
    }
}
