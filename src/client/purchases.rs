//! Purchase endpoints

use reqwest::Method;
use tracing::debug;
use uuid::Uuid;

use super::EntradaClient;
use crate::models::{OrderStatus, PurchaseRequest, PurchaseResponse};
use crate::utils::errors::Result;

impl EntradaClient {
    /// Create a purchase order and obtain the payment handoff
    ///
    /// The backend deduplicates on `idempotency_key`; see
    /// [`PurchaseRequest::ensure_idempotency_key`] for retrying callers.
    pub async fn create_purchase(&self, purchase: &PurchaseRequest) -> Result<PurchaseResponse> {
        let response: PurchaseResponse = self
            .send_json(Method::POST, "/api/v1/purchases", purchase)
            .await?;

        debug!(
            order_id = %response.order_id,
            status = %response.status,
            "Purchase order created"
        );
        Ok(response)
    }

    /// Fetch the current status of a purchase order
    pub async fn get_order_status(&self, order_id: Uuid) -> Result<OrderStatus> {
        self.get_json(&format!("/api/v1/purchases/{}/status", order_id))
            .await
    }
}
