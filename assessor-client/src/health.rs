//! Health endpoint

use assessor_core::HEALTH_PATH;
use assessor_core::dto::health::HealthResponse;
use async_trait::async_trait;

use crate::BackendClient;
use crate::error::Result;

/// Anything that can answer a backend health check
///
/// The CLI view depends on this trait rather than on [`BackendClient`]
/// directly so it can be driven without a network.
#[async_trait]
pub trait HealthSource: Send + Sync {
    /// Fetch the current backend health
    async fn fetch_health(&self) -> Result<HealthResponse>;
}

impl BackendClient {
    /// Query the backend health endpoint
    ///
    /// Sends `GET /api/v1/health` with no headers, body or auth.
    ///
    /// # Returns
    /// The parsed health response
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}{}", self.base_url, HEALTH_PATH);
        tracing::debug!(%url, "requesting backend health");
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl HealthSource for BackendClient {
    async fn fetch_health(&self) -> Result<HealthResponse> {
        self.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use axum::{Json, Router, http::StatusCode, routing::get};

    /// Serve `router` on an ephemeral port and return its base URL
    async fn serve(router: Router) -> anyhow::Result<String> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(format!("http://{}", addr))
    }

    #[tokio::test]
    async fn test_health_ok() -> anyhow::Result<()> {
        let router = Router::new().route(
            HEALTH_PATH,
            get(|| async { Json(serde_json::json!({ "status": "ok" })) }),
        );
        let client = BackendClient::new(serve(router).await?);

        let health = client.health().await?;
        assert_eq!(health, HealthResponse::ok());
        Ok(())
    }

    #[tokio::test]
    async fn test_health_through_trait() -> anyhow::Result<()> {
        let router = Router::new().route(
            HEALTH_PATH,
            get(|| async { Json(serde_json::json!({ "status": "degraded", "db": "slow" })) }),
        );
        let source: Box<dyn HealthSource> = Box::new(BackendClient::new(serve(router).await?));

        let health = source.fetch_health().await?;
        assert_eq!(health.status, "degraded");
        Ok(())
    }

    #[tokio::test]
    async fn test_health_server_error() -> anyhow::Result<()> {
        let router = Router::new().route(
            HEALTH_PATH,
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        );
        let client = BackendClient::new(serve(router).await?);

        let err = client.health().await.unwrap_err();
        assert!(err.is_server_error());
        assert!(matches!(err, ClientError::ApiError { status: 503, ref message } if message == "maintenance"));
        Ok(())
    }

    #[tokio::test]
    async fn test_health_non_json_body() -> anyhow::Result<()> {
        let router = Router::new().route(HEALTH_PATH, get(|| async { "all good" }));
        let client = BackendClient::new(serve(router).await?);

        let err = client.health().await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_health_missing_status_field() -> anyhow::Result<()> {
        let router = Router::new().route(
            HEALTH_PATH,
            get(|| async { Json(serde_json::json!({ "healthy": true })) }),
        );
        let client = BackendClient::new(serve(router).await?);

        let err = client.health().await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_health_connection_refused() -> anyhow::Result<()> {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);

        let client = BackendClient::new(format!("http://{}", addr));
        let err = client.health().await.unwrap_err();
        assert!(err.is_transport());
        Ok(())
    }
}
