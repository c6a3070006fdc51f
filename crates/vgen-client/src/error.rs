//! Client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    MissingCredential(String),

    #[error("Generation service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Download failed with HTTP status {status}")]
    Download { status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an API error, rewriting the messages of two well-known service
    /// failures into actionable text.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: friendly_api_message(body.into()),
        }
    }
}

/// Remap service error bodies the user can actually act on.
fn friendly_api_message(raw: String) -> String {
    if raw.contains("billing enabled") {
        return "The video model requires billing to be enabled for your API key. \
                Please check your account's billing status and API key permissions."
            .to_string();
    }
    if raw.contains("API key not valid") {
        return "Invalid API key. Please ensure your API key is correctly configured \
                and has the necessary permissions to use the video model."
            .to_string();
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_error_is_rewritten() {
        let err = ClientError::api(403, "caller does not have billing enabled");
        assert!(err.to_string().contains("billing to be enabled"));
    }

    #[test]
    fn test_invalid_key_error_is_rewritten() {
        let err = ClientError::api(400, "API key not valid. Please pass a valid API key.");
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn test_other_bodies_pass_through() {
        let err = ClientError::api(429, "quota exhausted for model");
        assert!(err.to_string().contains("quota exhausted"));
    }
}
