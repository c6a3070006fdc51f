//! Ports to the external collaborators.

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use vgen_models::{GenerationRequest, VideoOperation};

/// Contract of the remote generation service.
///
/// `poll` is an idempotent status refresh: polling an already-terminal handle
/// returns an equivalent terminal handle.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Submit a request and receive the initial operation handle.
    async fn submit(&self, request: &GenerationRequest) -> Result<VideoOperation, ServiceError>;

    /// Refresh the status of an in-flight operation.
    async fn poll(&self, operation: &VideoOperation) -> Result<VideoOperation, ServiceError>;

    /// Download the produced video resource.
    async fn download(&self, uri: &str) -> Result<Vec<u8>, ServiceError>;

    /// Plain fetch of an auxiliary asset (audio tracks).
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, ServiceError>;
}

/// Failures reported by a [`GenerationService`] implementation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service credential is absent; raised before any submission
    #[error("{0}")]
    MissingCredential(String),

    /// The service rejected or failed the request
    #[error("{message}")]
    Remote { message: String },

    /// A resource download returned a non-success transport status
    #[error("download failed with HTTP status {status}")]
    Download { status: u16 },

    /// Anything else: connection errors, malformed payloads
    #[error("{message}")]
    Transport { message: String },
}

impl ServiceError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// Contract of the audio/video transcoding engine.
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Mux `audio` into `video` and return the combined container bytes.
    ///
    /// The video stream is copied unchanged; the audio stream is re-encoded
    /// to the target codec; the output is truncated to the shorter input.
    async fn merge(&self, video: &[u8], audio: &[u8]) -> Result<Vec<u8>, TranscodeError>;
}

/// Failure of a transcoding operation, including engine initialization.
///
/// Never escalated to a request failure: the orchestrator degrades to the
/// silent video instead.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TranscodeError {
    pub message: String,
}

impl TranscodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
