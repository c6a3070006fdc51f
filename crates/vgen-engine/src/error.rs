//! Orchestrator error taxonomy.

use thiserror::Error;

use crate::service::ServiceError;

pub type GenerateResult<T> = Result<T, GenerateError>;

/// Terminal failures of a generation request. None are retried internally,
/// and the audio-merge path never produces one: it degrades to a successful
/// silent-video result instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The request was rejected before any network activity
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The service credential is absent
    #[error("{0}")]
    ConfigurationMissing(String),

    /// The remote operation completed with an error payload
    #[error("{0}")]
    RemoteOperationFailed(String),

    /// The operation completed without a usable result reference
    #[error("Video generation succeeded but no download link was provided")]
    MissingResult,

    /// The produced video could not be downloaded
    #[error("Failed to download video: HTTP status {status}")]
    DownloadFailed { status: u16 },

    /// The operation did not complete within the polling deadline
    #[error("Video generation timed out after {0} seconds")]
    Timeout(u64),

    /// Any other propagated failure
    #[error("{0}")]
    Unknown(String),
}

impl From<ServiceError> for GenerateError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingCredential(message) => Self::ConfigurationMissing(message),
            ServiceError::Remote { message } => Self::RemoteOperationFailed(message),
            ServiceError::Download { status } => Self::DownloadFailed { status },
            ServiceError::Transport { message } => Self::Unknown(message),
        }
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(err: std::io::Error) -> Self {
        Self::Unknown(format!("IO error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_mapping() {
        let err: GenerateError = ServiceError::MissingCredential("no key".into()).into();
        assert!(matches!(err, GenerateError::ConfigurationMissing(_)));

        let err: GenerateError = ServiceError::Download { status: 403 }.into();
        assert!(matches!(err, GenerateError::DownloadFailed { status: 403 }));

        let err: GenerateError = ServiceError::remote("model unavailable").into();
        assert_eq!(err.to_string(), "model unavailable");
    }
}
