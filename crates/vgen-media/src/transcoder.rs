//! Audio muxing on top of the FFmpeg CLI.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info};

use vgen_engine::{TranscodeError, Transcoder};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};

/// Logical names of the transcoder's working files.
const VIDEO_INPUT: &str = "input.mp4";
const AUDIO_INPUT: &str = "audio.mp3";
const MUX_OUTPUT: &str = "output.mp4";

/// FFmpeg-backed transcoder that muxes a background audio track into a video.
///
/// The binary is resolved and the scratch directory created once, on first
/// use. Working storage uses fixed file names, so merges are serialized
/// through an internal mutex; concurrent callers queue rather than race.
pub struct FfmpegTranscoder {
    state: OnceCell<TranscoderState>,
    lock: Mutex<()>,
    timeout_secs: Option<u64>,
}

struct TranscoderState {
    ffmpeg: PathBuf,
    workdir: tempfile::TempDir,
}

impl FfmpegTranscoder {
    pub fn new() -> Self {
        Self {
            state: OnceCell::new(),
            lock: Mutex::new(()),
            timeout_secs: Some(600),
        }
    }

    /// Override the per-merge timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Resolve the binary and scratch directory, once per instance.
    async fn state(&self) -> MediaResult<&TranscoderState> {
        self.state
            .get_or_try_init(|| async {
                let ffmpeg = crate::command::check_ffmpeg()?;
                let workdir = tempfile::tempdir()?;
                info!(ffmpeg = %ffmpeg.display(), "Transcoder initialized");
                Ok(TranscoderState { ffmpeg, workdir })
            })
            .await
    }

    /// Mux `audio` into `video`: copy the video stream, re-encode the audio
    /// to AAC, map one stream of each, truncate to the shorter input.
    pub async fn merge_audio(&self, video: &[u8], audio: &[u8]) -> MediaResult<Vec<u8>> {
        let _guard = self.lock.lock().await;
        let state = self.state().await?;

        let dir = state.workdir.path();
        let video_path = dir.join(VIDEO_INPUT);
        let audio_path = dir.join(AUDIO_INPUT);
        let output_path = dir.join(MUX_OUTPUT);

        tokio::fs::write(&video_path, video).await?;
        tokio::fs::write(&audio_path, audio).await?;
        debug!(video_bytes = video.len(), audio_bytes = audio.len(), "Wrote working files");

        let cmd = FfmpegCommand::new(&output_path)
            .input(&video_path)
            .input(&audio_path)
            .video_codec("copy")
            .audio_codec("aac")
            .map("0:v:0")
            .map("1:a:0")
            .shortest();

        let mut runner = FfmpegRunner::new(&state.ffmpeg);
        if let Some(secs) = self.timeout_secs {
            runner = runner.with_timeout(secs);
        }

        let run_result = runner.run(&cmd).await;
        let merged = match run_result {
            Ok(()) => tokio::fs::read(&output_path).await,
            Err(e) => {
                cleanup(&[&video_path, &audio_path, &output_path]).await;
                return Err(e);
            }
        };

        // Remove working files so a later failed merge cannot read stale output.
        cleanup(&[&video_path, &audio_path, &output_path]).await;
        Ok(merged?)
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

async fn cleanup(paths: &[&std::path::Path]) {
    for path in paths {
        let _ = tokio::fs::remove_file(path).await;
    }
}

impl From<MediaError> for TranscodeError {
    fn from(err: MediaError) -> Self {
        TranscodeError::new(err.to_string())
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn merge(&self, video: &[u8], audio: &[u8]) -> Result<Vec<u8>, TranscodeError> {
        self.merge_audio(video, audio).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exercising a real mux requires an ffmpeg binary and sample media, so
    // these tests cover the initialization contract instead.

    #[tokio::test]
    async fn test_initialization_is_lazy() {
        let transcoder = FfmpegTranscoder::new();
        // Construction alone must not resolve the binary.
        assert!(transcoder.state.get().is_none());
    }

    #[tokio::test]
    async fn test_merge_on_host_without_ffmpeg_reports_cleanly() {
        // Point PATH at an empty directory so resolution fails regardless of
        // the host environment.
        let empty = tempfile::tempdir().unwrap();
        let saved = std::env::var_os("PATH");
        std::env::set_var("PATH", empty.path());

        let transcoder = FfmpegTranscoder::new();
        let result = transcoder.merge_audio(b"video", b"audio").await;

        match saved {
            Some(path) => std::env::set_var("PATH", path),
            None => std::env::remove_var("PATH"),
        }

        assert!(matches!(result, Err(MediaError::FfmpegNotFound)));
    }
}
