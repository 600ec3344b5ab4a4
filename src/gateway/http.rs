//! HTTP gateway: talks to the response service over reqwest.

use async_trait::async_trait;

use crate::config::SanctuaryConfig;
use crate::error::GatewayError;

use super::{RespondBody, RespondRequest, ResponseGateway};

/// Gateway backed by the live response service.
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a gateway with the configured base URL and request timeout.
    pub fn from_config(config: &SanctuaryConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: config.backend_url.clone(),
            client,
        })
    }

    fn respond_url(&self) -> String {
        format!("{}/respond", self.base_url.trim().trim_end_matches('/'))
    }
}

#[async_trait]
impl ResponseGateway for HttpGateway {
    fn name(&self) -> &str {
        "http"
    }

    async fn respond(&self, question: &str, mentor_option: u8) -> Result<String, GatewayError> {
        let body = RespondRequest {
            question,
            mentor_option,
        };

        let resp = self
            .client
            .post(self.respond_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Response service unreachable");
                GatewayError::Transport(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Response service returned an error status");
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let raw = resp
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        RespondBody::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn respond_url_joins_cleanly() {
        let gw = HttpGateway::new("  https://sanctuary.example.com/");
        assert_eq!(gw.respond_url(), "https://sanctuary.example.com/respond");

        let gw = HttpGateway::new("http://localhost:5000");
        assert_eq!(gw.respond_url(), "http://localhost:5000/respond");
    }

    #[test]
    fn from_config_uses_backend_url() {
        let config = SanctuaryConfig {
            backend_url: "http://127.0.0.1:9".to_string(),
            request_timeout: Duration::from_secs(1),
            offline: false,
        };
        let gw = HttpGateway::from_config(&config).unwrap();
        assert_eq!(gw.respond_url(), "http://127.0.0.1:9/respond");
        assert_eq!(gw.name(), "http");
    }

    // ── Network error tests (expected to fail with no server) ───────

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let config = SanctuaryConfig {
            backend_url: "http://127.0.0.1:9".to_string(),
            request_timeout: Duration::from_secs(2),
            offline: false,
        };
        let gw = HttpGateway::from_config(&config).unwrap();
        let result = gw.respond("hello", 0).await;
        assert!(
            matches!(result, Err(GatewayError::Transport(_))),
            "Expected transport error, got: {result:?}"
        );
    }
}
