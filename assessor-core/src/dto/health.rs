//! Health DTOs

use serde::{Deserialize, Serialize};

/// Status reported by a healthy backend
pub const STATUS_OK: &str = "ok";

/// Body of `GET /api/v1/health`
///
/// Only `status` is read. Any other fields the backend adds are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Free-form status text, e.g. "ok" or "degraded"
    pub status: String,
}

impl HealthResponse {
    /// Response a healthy backend returns
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
        }
    }
}
