//! Error types for the backend client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, timeout, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error body returned by the API
        message: String,
    },

    /// Response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if the backend could not be reached at all
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_classification() {
        assert!(ClientError::api_error(503, "down").is_server_error());
        assert!(!ClientError::api_error(404, "missing").is_server_error());
        assert!(!ClientError::ParseError("bad".into()).is_transport());
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::api_error(500, "boom");
        assert_eq!(err.to_string(), "API error (status 500): boom");
    }
}
