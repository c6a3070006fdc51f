//! Generation orchestrator.
//!
//! Owns the request lifecycle: validate the request, submit it to the remote
//! generation service, poll the returned operation until it completes,
//! download the produced video, and optionally merge a background audio track.
//! The service client and the transcoder are injected through the
//! [`GenerationService`] and [`Transcoder`] ports.

pub mod config;
pub mod error;
pub mod generator;
pub mod progress;
pub mod service;

pub use config::{EngineConfig, PollPolicy};
pub use error::{GenerateError, GenerateResult};
pub use generator::{GeneratedVideo, Generator};
pub use progress::{FnSink, NullSink, ProgressSink};
pub use service::{GenerationService, ServiceError, TranscodeError, Transcoder};
