//! Backend configuration
//!
//! Where to listen and which browser origins may call the API.

use axum::http::HeaderValue;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Frontends allowed to call the API by default
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];

/// Backend configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address to bind (e.g., "0.0.0.0:8000")
    pub bind_addr: String,

    /// Origins allowed by CORS, credentials included
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Recognized environment variables:
    /// - ASSESSOR_BIND_ADDR (optional, default: 0.0.0.0:8000)
    /// - ASSESSOR_ALLOWED_ORIGINS (optional, comma-separated, default: localhost:3000 and :3001)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_addr = std::env::var("ASSESSOR_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let allowed_origins = std::env::var("ASSESSOR_ALLOWED_ORIGINS")
            .ok()
            .map(|raw| parse_origins(&raw))
            .unwrap_or(defaults.allowed_origins);

        Self {
            bind_addr,
            allowed_origins,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        for origin in &self.allowed_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                anyhow::bail!("allowed origin {} must start with http:// or https://", origin);
            }
            HeaderValue::from_str(origin)
                .map_err(|e| anyhow::anyhow!("allowed origin {} is not a valid header: {}", origin, e))?;
        }

        Ok(())
    }

    /// Allowed origins as header values, skipping any that do not parse
    pub fn origin_headers(&self) -> Vec<HeaderValue> {
        self.allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            allowed_origins: default_origins(),
        }
    }
}

fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}
