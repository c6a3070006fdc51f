//! Shared data models for the vgen toolkit.
//!
//! This crate provides Serde-serializable types for:
//! - Generation requests (prompt, seed image, aspect ratio, audio track)
//! - Remote operation handles
//! - Generation history entries
//! - Bundled audio tracks and progress flavor text

pub mod aspect;
pub mod history;
pub mod operation;
pub mod request;
pub mod tracks;

// Re-export common types
pub use aspect::{AspectRatio, AspectRatioParseError};
pub use history::HistoryEntry;
pub use operation::VideoOperation;
pub use request::{AudioTrack, GenerationRequest, RequestError, SeedImage};
pub use tracks::{builtin_tracks, LOADING_MESSAGES};
