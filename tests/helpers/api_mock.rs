//! Mock Entrada API server for testing
//!
//! This module provides a mock HTTP server that simulates the Entrada
//! backend for integration tests. It uses wiremock to create configurable
//! mock responses.

use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use entrada_client::{config::Settings, EntradaClient};

/// Mock Entrada backend for testing
pub struct EntradaMockServer {
    pub server: MockServer,
}

impl EntradaMockServer {
    /// Start a fresh mock backend
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Build a client pointed at this mock backend, without a bearer token
    pub fn client(&self) -> EntradaClient {
        let mut settings = Settings::default();
        settings.api.base_url = self.server.uri();
        EntradaClient::new(&settings).expect("mock client construction")
    }

    /// Build a client pointed at this mock backend with a bearer token
    pub fn client_with_token(&self, token: &str) -> EntradaClient {
        self.client().with_bearer_token(token)
    }

    /// Mount a JSON response for a given verb and endpoint path
    pub async fn mock_endpoint(&self, verb: &str, endpoint: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount an empty 204 response, as the backend returns for deletes
    pub async fn mock_no_content(&self, verb: &str, endpoint: &str) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    /// Mount a plain-text error response (no JSON error body)
    pub async fn mock_plain_error(&self, verb: &str, endpoint: &str, status: u16, body: &str) {
        Mock::given(method(verb))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Verify that a specific endpoint was called the expected number of times
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let received_requests = self.server.received_requests().await.unwrap();
        let matching_requests = received_requests
            .iter()
            .filter(|req| req.url.path() == endpoint)
            .count();

        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }

    /// The single request received so far, panicking when there is not exactly one
    pub async fn single_request(&self) -> wiremock::Request {
        let mut requests = self.server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.remove(0)
    }
}
