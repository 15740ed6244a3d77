//! Assessor HTTP Client
//!
//! A small, type-safe HTTP client for the assessor backend API.
//!
//! # Example
//!
//! ```no_run
//! use assessor_client::BackendClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), assessor_client::ClientError> {
//!     let client = BackendClient::new("http://localhost:8000");
//!     let health = client.health().await?;
//!
//!     println!("Backend status: {}", health.status);
//!     Ok(())
//! }
//! ```

pub mod error;
mod health;

pub use error::{ClientError, Result};
pub use health::HealthSource;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Base URL used when none is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// HTTP client for the assessor backend API
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g., "http://localhost:8000")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new backend client with a custom HTTP client
    ///
    /// The CLI passes a client with a request timeout so a health check
    /// against a hung backend still settles.
    ///
    /// # Example
    /// ```
    /// use assessor_client::BackendClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = BackendClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a backend response into a typed body such as
    /// [`HealthResponse`](assessor_core::dto::health::HealthResponse)
    ///
    /// A non-2xx status keeps the body text as the error message. A 2xx body
    /// without the expected fields (e.g. no `status` on the health endpoint)
    /// is a [`ClientError::ParseError`], which the health view shows as
    /// unreachable rather than as a status.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
