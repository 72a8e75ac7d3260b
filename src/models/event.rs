//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub organizer_id: Uuid,
    pub name: String,
    pub location_text: Option<String>,
    pub point_location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub capacity_total: i32,
    pub capacity_available: i32,
    pub allow_children: bool,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub ticket_types: Vec<TicketType>,
    #[serde(default)]
    pub event_services: Vec<EventService>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketType {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub price: f64,
    pub is_child: bool,
    pub created_at: DateTime<Utc>,
}

/// Add-on service sold alongside an event (catering, transport, child care)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventService {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub service_type: String,
    pub stock_total: i32,
    pub stock_available: i32,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    pub name: String,
    pub location_text: Option<String>,
    pub point_location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub capacity_total: i32,
    pub allow_children: bool,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Partial event update; fields left as `None` are omitted from the body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_total: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_children: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Filters for the event listing endpoint
#[derive(Debug, Clone, Default)]
pub struct EventFilters {
    pub category: Option<String>,
    pub search: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl EventFilters {
    /// Render the filters as a URL query string, or `None` when no filter is set
    pub fn to_query_string(&self) -> Option<String> {
        let mut params = Vec::new();

        if let Some(ref category) = self.category {
            params.push(format!("category={}", urlencoding::encode(category)));
        }
        if let Some(ref search) = self.search {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        if let Some(date_from) = self.date_from {
            params.push(format!(
                "date_from={}",
                urlencoding::encode(&date_from.to_rfc3339())
            ));
        }
        if let Some(date_to) = self.date_to {
            params.push(format!(
                "date_to={}",
                urlencoding::encode(&date_to.to_rfc3339())
            ));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        if let Some(offset) = self.offset {
            params.push(format!("offset={}", offset));
        }

        if params.is_empty() {
            None
        } else {
            Some(params.join("&"))
        }
    }
}
