//! Test data builders for integration tests
//!
//! Sample wire-format payloads and typed request builders mirroring what
//! the Entrada backend produces and consumes.

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use entrada_client::models::{
    AttendeeData, EventCreate, PurchaseRequest, TicketValidationRequest,
};

/// Fixed event id used across fixtures
pub fn event_id() -> Uuid {
    Uuid::parse_str("0d9af37b-7d1c-4a92-b7a8-2f4a86a1b1c0").unwrap()
}

/// Fixed organizer id used across fixtures
pub fn organizer_id() -> Uuid {
    Uuid::parse_str("7e0d8a33-6e87-4a01-9c2d-55a1d4f2e9aa").unwrap()
}

/// Fixed user id used across fixtures
pub fn user_id() -> Uuid {
    Uuid::parse_str("91b7a9a8-22c5-4f83-a1d4-6a2c9b8e0f31").unwrap()
}

/// Fixed order id used across fixtures
pub fn order_id() -> Uuid {
    Uuid::parse_str("b3c3c9a1-91de-4f7b-9b3a-0a2a2f0f7a11").unwrap()
}

/// Fixed ticket id used across fixtures
pub fn ticket_id() -> Uuid {
    Uuid::parse_str("ac2f63d4-5a87-4f6e-8d7b-3a1f9c0e2b44").unwrap()
}

/// Event payload as the backend serializes it
pub fn event_json() -> Value {
    json!({
        "id": event_id(),
        "organizer_id": organizer_id(),
        "name": "Fiesta de la Vendimia",
        "location_text": "Parque O'Higgins, Santiago",
        "point_location": null,
        "starts_at": "2026-03-14T20:00:00Z",
        "ends_at": "2026-03-15T02:00:00Z",
        "capacity_total": 500,
        "capacity_available": 342,
        "allow_children": true,
        "category": "festival",
        "description": "Celebración anual de la vendimia",
        "image_url": null,
        "ticket_types": [
            {
                "id": "11111111-2222-4333-8444-555566667777",
                "event_id": event_id(),
                "name": "General",
                "price": 15000.0,
                "is_child": false,
                "created_at": "2026-01-10T12:00:00Z"
            }
        ],
        "event_services": [],
        "created_at": "2026-01-10T12:00:00Z",
        "updated_at": null
    })
}

/// Ticket payload as the backend serializes it
pub fn ticket_json() -> Value {
    json!({
        "id": ticket_id(),
        "order_item_id": "d1a2b3c4-0000-4111-8222-333344445555",
        "event_id": event_id(),
        "holder_first_name": "Carla",
        "holder_last_name": "Fuentes",
        "holder_document_type": "RUT",
        "holder_document_number": "12.345.678-5",
        "is_child": false,
        "qr_signature": "c2lnbmVkLXFyLXBheWxvYWQ=",
        "pdf_object_key": "tickets/ac2f63d4.pdf",
        "status": "issued",
        "issued_at": "2026-02-01T18:35:00Z",
        "validated_at": null,
        "used_at": null,
        "created_at": "2026-02-01T18:35:00Z",
        "updated_at": "2026-02-01T18:35:00Z"
    })
}

/// Purchase response payload for a hosted-checkout payment
pub fn purchase_response_json() -> Value {
    json!({
        "order_id": order_id(),
        "payment_link": "https://pay.example.com/checkout/b3c3c9a1",
        "status": "pending",
        "payment_method": "mercadopago"
    })
}

/// Order status payload for a paid order
pub fn order_status_json() -> Value {
    json!({
        "order_id": order_id(),
        "status": "paid",
        "total": 45000.0,
        "currency": "CLP",
        "payment_provider": "mercadopago",
        "payment_reference": "MP-000123",
        "created_at": "2026-02-01T18:30:00Z",
        "paid_at": "2026-02-01T18:32:10Z"
    })
}

/// Typed create-event request matching the fixtures above
pub fn sample_event_create() -> EventCreate {
    EventCreate {
        name: "Fiesta de la Vendimia".to_string(),
        location_text: Some("Parque O'Higgins, Santiago".to_string()),
        point_location: None,
        starts_at: Utc.with_ymd_and_hms(2026, 3, 14, 20, 0, 0).unwrap(),
        ends_at: Some(Utc.with_ymd_and_hms(2026, 3, 15, 2, 0, 0).unwrap()),
        capacity_total: 500,
        allow_children: true,
        category: Some("festival".to_string()),
        description: Some("Celebración anual de la vendimia".to_string()),
        image_url: None,
    }
}

/// Typed purchase request with one adult attendee
pub fn sample_purchase_request() -> PurchaseRequest {
    PurchaseRequest {
        user_id: user_id(),
        event_id: event_id(),
        attendees: vec![AttendeeData {
            name: "Carla Fuentes".to_string(),
            email: Some("carla@example.com".to_string()),
            document_type: "RUT".to_string(),
            document_number: "12.345.678-5".to_string(),
            is_child: false,
            child_details: None,
        }],
        selected_services: None,
        idempotency_key: None,
        payment_method: None,
        receipt_url: None,
    }
}

/// Typed validation request matching the ticket fixture
pub fn sample_validation_request() -> TicketValidationRequest {
    TicketValidationRequest {
        qr_signature: "c2lnbmVkLXFyLXBheWxvYWQ=".to_string(),
        inspector_id: Uuid::parse_str("f0e1d2c3-b4a5-4697-8899-aabbccddeeff").unwrap(),
        event_id: Some(event_id()),
    }
}
