//! Client configuration.

use std::time::Duration;

/// Configuration for the generation service client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service credential; absent is a configuration error raised before
    /// any submission
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Generation model identifier
    pub model: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "veo-2.0-generate-001".to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// `VGEN_API_KEY` is the credential (with `GEMINI_API_KEY` accepted as a
    /// fallback); `VGEN_API_BASE_URL`, `VGEN_MODEL` and
    /// `VGEN_HTTP_TIMEOUT_SECS` override the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("VGEN_API_KEY")
                .or_else(|_| std::env::var("GEMINI_API_KEY"))
                .ok(),
            base_url: std::env::var("VGEN_API_BASE_URL")
                .unwrap_or(defaults.base_url)
                .trim_end_matches('/')
                .to_string(),
            model: std::env::var("VGEN_MODEL").unwrap_or(defaults.model),
            timeout: Duration::from_secs(
                std::env::var("VGEN_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
        }
    }

    /// Set the credential.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "veo-2.0-generate-001");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_base_url_is_normalized() {
        let config = ClientConfig::default().with_base_url("http://localhost:9999/v1/");
        assert_eq!(config.base_url, "http://localhost:9999/v1");
    }
}
