//! FFmpeg CLI wrapper.
//!
//! Provides a command builder and runner for the `ffmpeg` binary plus the
//! [`FfmpegTranscoder`], which implements the orchestrator's
//! [`vgen_engine::Transcoder`] port to mux a background audio track into a
//! generated video.

pub mod command;
pub mod error;
pub mod progress;
pub mod transcoder;

pub use command::{check_ffmpeg, FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
pub use progress::FfmpegProgress;
pub use transcoder::FfmpegTranscoder;
