//! Ticket models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub order_item_id: Uuid,
    pub event_id: Uuid,
    pub holder_first_name: String,
    pub holder_last_name: String,
    pub holder_document_type: Option<String>,
    pub holder_document_number: Option<String>,
    pub is_child: bool,
    pub qr_signature: String,
    pub pdf_object_key: Option<String>,
    pub status: String,
    pub issued_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for the ticket validation endpoint, sent by door scanners
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketValidationRequest {
    pub qr_signature: String,
    pub inspector_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<Uuid>,
}

/// Outcome of a validation scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketValidation {
    pub valid: bool,
    pub ticket_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    pub attendee_name: Option<String>,
    pub message: Option<String>,
}
