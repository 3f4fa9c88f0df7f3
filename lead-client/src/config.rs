//! Client configuration

/// Environment variable selecting the backend base URL
pub const API_URL_ENV: &str = "LEAD_API_URL";
/// Environment variable overriding the request timeout (seconds)
pub const API_TIMEOUT_ENV: &str = "LEAD_API_TIMEOUT_SECS";

/// Local development default when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration for connecting to the lead backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Request timeout in seconds; a timeout is treated like any
    /// other request failure
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read configuration from the environment, falling back to the
    /// local development address
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var(API_TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self { base_url, timeout }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    ///
    /// Fails when the underlying client cannot be built, e.g. the TLS
    /// backend cannot initialize.
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
