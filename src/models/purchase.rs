//! Purchase and order models

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attendee::AttendeeData;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub attendees: Vec<AttendeeData>,
    /// Service id mapped to requested quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_services: Option<HashMap<String, u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}

impl PurchaseRequest {
    /// Fill in a fresh idempotency key if the caller did not set one
    pub fn ensure_idempotency_key(&mut self) {
        if self.idempotency_key.is_none() {
            self.idempotency_key = Some(Uuid::new_v4().to_string());
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub order_id: Uuid,
    /// Absent for payment methods without a hosted checkout (bank transfer)
    pub payment_link: Option<String>,
    pub status: String,
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatus {
    pub order_id: Uuid,
    pub status: String,
    pub total: f64,
    pub currency: String,
    pub payment_provider: Option<String>,
    pub payment_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}
