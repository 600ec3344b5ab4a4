//! Remote response gateway: one request per user turn to the mentor
//! response service.
//!
//! Supports:
//! - **Http**: `POST {base}/respond` against the live service
//! - **Offline**: canned in-character sayings, no network

pub mod http;
pub mod offline;

pub use http::HttpGateway;
pub use offline::OfflineGateway;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::SanctuaryConfig;
use crate::error::GatewayError;

/// Issues a single response request per call. Implementations hold no state
/// between calls and never retry.
#[async_trait]
pub trait ResponseGateway: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Ask the service for the mentor's reply to `question`.
    async fn respond(&self, question: &str, mentor_option: u8) -> Result<String, GatewayError>;
}

/// Create the gateway selected by configuration.
pub fn create_gateway(config: &SanctuaryConfig) -> crate::error::Result<Arc<dyn ResponseGateway>> {
    if config.offline {
        tracing::info!("Using offline gateway (canned sayings)");
        return Ok(Arc::new(OfflineGateway::new()));
    }
    let gateway = HttpGateway::from_config(config)?;
    tracing::info!(backend = %config.backend_url, "Using response service");
    Ok(Arc::new(gateway))
}

/// Wire option code for a mentor.
///
/// Unknown identifiers map to 0 instead of failing.
pub fn mentor_option(mentor_id: &str) -> u8 {
    match mentor_id {
        "musashi" => 0,
        "rumi" => 1,
        "chanakya" => 2,
        other => {
            tracing::debug!(mentor = other, "Unknown mentor, using option 0");
            0
        }
    }
}

/// Request body of `POST /respond`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RespondRequest<'a> {
    pub question: &'a str,
    pub mentor_option: u8,
}

/// Response body of `POST /respond`: either `response` or `error` is set.
#[derive(Debug, Default, Deserialize)]
pub struct RespondBody {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RespondBody {
    /// Decode a raw body into the reply text or a gateway failure.
    pub fn parse(raw: &str) -> Result<String, GatewayError> {
        let body: RespondBody =
            serde_json::from_str(raw).map_err(|e| GatewayError::Decode(e.to_string()))?;
        body.into_result()
    }

    fn into_result(self) -> Result<String, GatewayError> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Err(GatewayError::Remote(error));
        }
        self.response
            .ok_or_else(|| GatewayError::Decode("missing `response` field".to_string()))
    }
}
