//! Data models
//!
//! Wire-format shapes exchanged with the Entrada backend. All entities are
//! created and owned by the backend; the client only serializes and
//! deserializes them.

pub mod attendee;
pub mod event;
pub mod health;
pub mod purchase;
pub mod ticket;

pub use attendee::{AttendeeData, ChildDetails, Medication};
pub use event::{Event, EventCreate, EventFilters, EventService, EventUpdate, TicketType};
pub use health::{HealthStatus, ReadyStatus};
pub use purchase::{OrderStatus, PurchaseRequest, PurchaseResponse};
pub use ticket::{Ticket, TicketValidation, TicketValidationRequest};
