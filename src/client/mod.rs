//! Entrada API client
//!
//! This module provides the HTTP client for the Entrada backend, including
//! client setup, header injection, error normalization, and response
//! parsing. Endpoint wrappers live in the submodules, one per resource.

pub mod events;
pub mod health;
pub mod purchases;
pub mod tickets;

use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::config::Settings;
use crate::utils::errors::{ApiError, EntradaError, Result};

/// Error body shape returned by the Entrada backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Stateless client for the Entrada ticketing API
///
/// The client is cheap to clone; all clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct EntradaClient {
    client: Client,
    base_url: Url,
    bearer_token: Option<String>,
}

impl EntradaClient {
    /// Create a new client from settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let base_url = Url::parse(&settings.api.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .user_agent(settings.api.user_agent.as_str())
            .build()
            .map_err(EntradaError::Http)?;

        Ok(Self {
            client,
            base_url,
            bearer_token: settings.auth.bearer_token.clone(),
        })
    }

    /// Set the bearer token attached to subsequent requests
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the configured base URL
    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.as_str().trim_end_matches('/').to_string();
        url.push_str(path);
        Url::parse(&url).map_err(EntradaError::UrlParse)
    }

    /// Issue a request, injecting headers and normalizing failures
    ///
    /// All endpoint methods funnel through here. Non-2xx responses are
    /// turned into [`ApiError::Status`] carrying the server-provided detail
    /// message, falling back to the HTTP status reason.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.header(header::CONTENT_TYPE, "application/json");
        let request = match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                EntradaError::Api(ApiError::Timeout)
            } else if e.is_connect() {
                EntradaError::Api(ApiError::ServiceUnavailable)
            } else {
                EntradaError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = extract_error_detail(response).await;
            warn!(status = %status, detail = %detail, "Entrada API request failed");
            return Err(EntradaError::Api(ApiError::Status { status, detail }));
        }

        Ok(response)
    }

    /// GET a JSON resource
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path = path, "GET request to Entrada API");
        let url = self.endpoint(path)?;
        let response = self.execute(self.client.get(url)).await?;
        parse_json(response).await
    }

    /// Send a JSON body and parse a JSON response
    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(method = %method, path = path, "Request to Entrada API");
        let url = self.endpoint(path)?;
        let response = self
            .execute(self.client.request(method, url).json(body))
            .await?;
        parse_json(response).await
    }

    /// DELETE a resource, expecting an empty (204) response
    async fn delete_empty(&self, path: &str) -> Result<()> {
        debug!(path = path, "DELETE request to Entrada API");
        let url = self.endpoint(path)?;
        let response = self.execute(self.client.delete(url)).await?;

        if response.status() != StatusCode::NO_CONTENT {
            debug!(status = %response.status(), "DELETE returned a body, discarding");
        }
        Ok(())
    }
}

/// Parse a success response body, treating 204 as an empty value
async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if response.status() == StatusCode::NO_CONTENT {
        return serde_json::from_value(serde_json::Value::Null)
            .map_err(|e| EntradaError::Api(ApiError::InvalidResponse(e.to_string())));
    }

    response
        .json()
        .await
        .map_err(|e| EntradaError::Api(ApiError::InvalidResponse(e.to_string())))
}

/// Pull the `detail` field out of an error body, falling back to the
/// HTTP status reason
async fn extract_error_detail(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            detail: Some(detail),
        }) => detail,
        _ => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    }
}
