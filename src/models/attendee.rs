//! Attendee model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendeeData {
    pub name: String,
    pub email: Option<String>,
    pub document_type: String,
    pub document_number: String,
    pub is_child: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_details: Option<ChildDetails>,
}

/// Extra fields collected for child attendees
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChildDetails {
    pub birth_date: Option<DateTime<Utc>>,
    pub allergies: Option<String>,
    pub special_needs: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<Medication>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub frequency: String,
    pub notes: Option<String>,
}
