//! Configuration module
//!
//! Handles CLI configuration: where the backend lives and how long to wait for it.

use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend service
    pub backend_url: String,

    /// Upper bound on a single request to the backend
    pub timeout: Duration,
}

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

impl Config {
    /// Creates a new configuration
    pub fn new(backend_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            backend_url: backend_url.into(),
            timeout,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backend_url.is_empty() {
            anyhow::bail!("backend_url cannot be empty");
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            anyhow::bail!("backend_url must start with http:// or https://");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessor_client::DEFAULT_BACKEND_URL;

    fn default_config() -> Config {
        Config::new(DEFAULT_BACKEND_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = default_config();

        config.backend_url = String::new();
        assert!(config.validate().is_err());

        config.backend_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());

        config.backend_url = "https://assessor.example.com".to_string();
        assert!(config.validate().is_ok());

        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }
}
