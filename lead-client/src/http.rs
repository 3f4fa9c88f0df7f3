//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::HealthResponse;

/// HTTP client for making requests to the lead backend
///
/// Thin wrapper with a fixed base URL and timeout; every failed
/// response is logged here before it reaches the caller.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Backend base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await.map_err(|e| {
            tracing::error!(path, error = %e, "GET request failed");
            e
        })?;
        Self::handle_response(path, response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(path, error = %e, "POST request failed");
                e
            })?;
        Self::handle_response(path, response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let detail = extract_detail(&text);
            tracing::error!(path, %status, detail, "API error");
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(detail)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(detail))
                }
                _ => Err(ClientError::Internal(detail)),
            };
        }

        let body = response.text().await?;
        decode_body(path, &body)
    }

    // ========== Health API ==========

    /// Liveness probe
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.get("/health").await
    }
}

/// Decode a successful response body
fn decode_body<T: DeserializeOwned>(path: &str, body: &str) -> ClientResult<T> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(path, error = %e, "failed to decode response body");
        ClientError::Serialization(e)
    })
}

/// Pull the human-readable `detail` field out of a backend error
/// body, falling back to the raw text
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
