//! Ticket endpoints

use reqwest::Method;
use tracing::{debug, warn};
use uuid::Uuid;

use super::EntradaClient;
use crate::models::{Ticket, TicketValidation, TicketValidationRequest};
use crate::utils::errors::Result;

impl EntradaClient {
    /// List all tickets held by a user
    pub async fn get_user_tickets(&self, user_id: Uuid) -> Result<Vec<Ticket>> {
        self.get_json(&format!("/api/v1/tickets/user/{}", user_id))
            .await
    }

    /// Fetch a single ticket by id
    pub async fn get_ticket(&self, ticket_id: Uuid) -> Result<Ticket> {
        self.get_json(&format!("/api/v1/tickets/{}", ticket_id))
            .await
    }

    /// Submit a QR scan for validation (scanner/inspector only)
    ///
    /// A rejected scan is a successful call with `valid: false`; the
    /// verdict itself comes from the backend.
    pub async fn validate_ticket(
        &self,
        request: &TicketValidationRequest,
    ) -> Result<TicketValidation> {
        let validation: TicketValidation = self
            .send_json(Method::POST, "/api/v1/tickets/validate", request)
            .await?;

        if validation.valid {
            debug!(
                ticket_id = ?validation.ticket_id,
                "Ticket validated successfully"
            );
        } else {
            warn!(
                inspector_id = %request.inspector_id,
                message = ?validation.message,
                "Ticket failed validation"
            );
        }

        Ok(validation)
    }
}
