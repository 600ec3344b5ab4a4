//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Backend used when `SANCTUARY_BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Default per-request timeout for the response service.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the sanctuary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanctuaryConfig {
    /// Base URL of the response service; `/respond` is appended per call.
    pub backend_url: String,
    /// Timeout applied to each request by the HTTP client.
    pub request_timeout: Duration,
    /// Answer with canned sayings instead of calling the backend.
    pub offline: bool,
}

impl Default for SanctuaryConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            offline: false,
        }
    }
}

impl SanctuaryConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = match lookup("SANCTUARY_BACKEND_URL") {
            Some(raw) if !raw.trim().is_empty() => normalize_backend_url(&raw)?,
            _ => DEFAULT_BACKEND_URL.to_string(),
        };

        let timeout_secs = match lookup("SANCTUARY_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "Invalid SANCTUARY_REQUEST_TIMEOUT_SECS, using {}s",
                        DEFAULT_REQUEST_TIMEOUT_SECS
                    );
                    DEFAULT_REQUEST_TIMEOUT_SECS
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let offline = lookup("SANCTUARY_OFFLINE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            backend_url,
            request_timeout: Duration::from_secs(timeout_secs),
            offline,
        })
    }
}

/// Trim whitespace and trailing slashes, and require an http(s) URL.
fn normalize_backend_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        key: "SANCTUARY_BACKEND_URL".to_string(),
        message: format!("{trimmed}: {e}"),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            key: "SANCTUARY_BACKEND_URL".to_string(),
            message: format!("unsupported scheme {}", parsed.scheme()),
        });
    }
    Ok(trimmed.to_string())
}
