//! Strand API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are driven by [`Schema`](crate::Schema) values
//! layered on top of it.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{Result, StrandError};

const DEFAULT_API_URL: &str = "https://app.strand.bio/api/v2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
const USER_AGENT: &str = concat!("strandapi/", env!("CARGO_PKG_VERSION"));

/// Low-level Strand API client.
///
/// Holds the credential and base URL fixed at construction time and performs
/// authenticated GET requests, returning parsed JSON. Resource-level
/// operations ([`Schema::get`](crate::Schema::get),
/// [`Schema::list_page`](crate::Schema::list_page),
/// [`Schema::list_all`](crate::Schema::list_all)) are built on this.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use strandapi::StrandClient;
///
/// # fn example() -> strandapi::Result<()> {
/// // Create from environment variables
/// let client = StrandClient::from_env()?;
///
/// // Or configure manually
/// let client = StrandClient::new("your-api-key", "https://app.strand.bio/api/v2")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StrandClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: String,
}

impl std::fmt::Debug for StrandClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrandClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl StrandClient {
    /// Create a client from environment variables.
    ///
    /// Uses `STRAND_API_KEY` for authentication and optionally
    /// `STRAND_API_URL` for the base URL (defaults to
    /// `https://app.strand.bio/api/v2`).
    ///
    /// # Errors
    ///
    /// Returns an error if `STRAND_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("STRAND_API_KEY").map_err(|_| {
            StrandError::ConfigMissing("STRAND_API_KEY environment variable not set".to_string())
        })?;

        let base_url =
            env::var("STRAND_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&api_key, &base_url)
    }

    /// Create a new client with the provided API key and base URL.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Strand API key, sent as the username half of HTTP
    ///   Basic auth with an empty password
    /// * `base_url` - Base URL for the Strand API (e.g., `https://app.strand.bio/api/v2`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(api_key: &str, base_url: &str) -> Result<Self> {
        Self::with_timeout(api_key, base_url, DEFAULT_TIMEOUT)
    }

    /// Create a new client with an explicit request timeout.
    pub fn with_timeout(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        // Ensure base URL ends with / so relative joins keep the version prefix
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .build()
            .map_err(StrandError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key: api_key.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Make a GET request and return the parsed JSON body.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Value> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .basic_auth(&self.api_key, Some(""))
            .send()
            .await
            .map_err(StrandError::HttpError)?;

        Self::decode_response(response).await
    }

    /// Make a GET request with query parameters and return the parsed JSON
    /// body.
    ///
    /// `query` is serialized into the query string; parameters whose
    /// `Serialize` impl skips them (absent cursors, empty filters) are
    /// omitted entirely rather than sent blank.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Value> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .get(url)
            .basic_auth(&self.api_key, Some(""))
            .query(query)
            .send()
            .await
            .map_err(StrandError::HttpError)?;

        Self::decode_response(response).await
    }

    /// Parse the response body and classify failures.
    ///
    /// The body is parsed before the status is inspected: a body that is not
    /// JSON at all means the client is not talking to the API (wrong base
    /// URL, proxy error page), and that diagnosis holds for every status
    /// code.
    async fn decode_response(response: Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await.map_err(StrandError::HttpError)?;

        let json: Value = serde_json::from_str(&body).map_err(|_| {
            StrandError::MalformedResponse(format!(
                "expected a JSON body but got {} bytes of something else (status {}); check the configured base URL",
                body.len(),
                status.as_u16(),
            ))
        })?;

        if status.as_u16() >= 400 {
            return Err(StrandError::ApiError {
                status_code: status.as_u16(),
                message: Self::error_message(&json, status),
            });
        }

        Ok(json)
    }

    /// Extract the human-readable message from an error envelope.
    ///
    /// Error responses conventionally look like
    /// `{"error": {"message": "..."}}`; anything else falls back to a
    /// generic message carrying the status code.
    fn error_message(json: &Value, status: StatusCode) -> String {
        json.get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()))
    }
}
