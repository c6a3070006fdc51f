//! The generation request lifecycle: validate, submit, poll, download,
//! optional audio mux with silent-video fallback.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use vgen_models::{AudioTrack, GenerationRequest, VideoOperation};

use crate::config::EngineConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::progress::ProgressSink;
use crate::service::{GenerationService, Transcoder};

/// Final product of a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedVideo {
    /// Path of the playable artifact on disk
    pub path: PathBuf,
    /// Whether the requested audio track was merged in
    pub has_audio: bool,
    /// Set when audio was requested but could not be merged; the artifact is
    /// the silent video in that case
    pub warning: Option<String>,
}

/// Orchestrates generation requests against injected collaborators.
///
/// One sequential async task per request. The transcoder is the only shared
/// resource; implementations serialize access internally.
pub struct Generator {
    service: Arc<dyn GenerationService>,
    transcoder: Arc<dyn Transcoder>,
    config: EngineConfig,
}

impl Generator {
    pub fn new(
        service: Arc<dyn GenerationService>,
        transcoder: Arc<dyn Transcoder>,
        config: EngineConfig,
    ) -> Self {
        Self {
            service,
            transcoder,
            config,
        }
    }

    /// Run one generation request to completion.
    ///
    /// Returns the playable artifact, or a [`GenerateError`] if no video
    /// could be produced. A failed audio merge does not fail the request:
    /// the silent video is returned with `warning` set.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        progress: &dyn ProgressSink,
    ) -> GenerateResult<GeneratedVideo> {
        request
            .validate()
            .map_err(|e| GenerateError::InvalidInput(e.to_string()))?;

        progress.emit("Initiating video generation...");
        let operation = self.service.submit(request).await?;
        info!(operation = %operation.name, aspect = %request.aspect_ratio, "Generation request submitted");
        progress.emit("Request sent. The model is now processing...");

        let operation = self.wait_for_completion(operation, progress).await?;

        if let Some(message) = operation.error {
            return Err(GenerateError::RemoteOperationFailed(message));
        }
        let uri = operation.video_uri.ok_or(GenerateError::MissingResult)?;

        progress.emit("Downloading generated video...");
        let video = self.service.download(&uri).await?;

        tokio::fs::create_dir_all(&self.config.output_dir).await?;
        let id = Uuid::new_v4();
        let silent_path = self.config.output_dir.join(format!("{id}.mp4"));
        tokio::fs::write(&silent_path, &video).await?;
        debug!(path = %silent_path.display(), bytes = video.len(), "Stored silent video");

        let Some(track) = request.audio.as_ref() else {
            progress.emit("Video ready!");
            return Ok(GeneratedVideo {
                path: silent_path,
                has_audio: false,
                warning: None,
            });
        };

        progress.emit(&format!("Merging audio track '{}'...", track.name));
        match self.merge_audio(&video, track, &id).await {
            Ok(merged_path) => {
                // The silent artifact is superseded by the muxed one.
                if let Err(e) = tokio::fs::remove_file(&silent_path).await {
                    warn!(error = %e, path = %silent_path.display(), "Failed to remove superseded silent video");
                }
                progress.emit("Video ready!");
                Ok(GeneratedVideo {
                    path: merged_path,
                    has_audio: true,
                    warning: None,
                })
            }
            Err(e) => {
                warn!(error = %e, track = %track.id, "Audio merge failed, returning silent video");
                progress.emit("Video ready!");
                Ok(GeneratedVideo {
                    path: silent_path,
                    has_audio: false,
                    warning: Some(format!(
                        "Could not merge audio track '{}': {}. The video was generated without sound.",
                        track.name, e
                    )),
                })
            }
        }
    }

    /// Poll until the operation reports `done`, or the deadline elapses.
    ///
    /// A handle that is already terminal is never re-polled.
    async fn wait_for_completion(
        &self,
        mut operation: VideoOperation,
        progress: &dyn ProgressSink,
    ) -> GenerateResult<VideoOperation> {
        let started = tokio::time::Instant::now();
        let mut attempts: u32 = 0;

        while !operation.done {
            if let Some(deadline) = self.config.poll.deadline {
                if started.elapsed() >= deadline {
                    warn!(operation = %operation.name, attempts, "Polling deadline elapsed");
                    return Err(GenerateError::Timeout(deadline.as_secs()));
                }
            }
            tokio::time::sleep(self.config.poll.interval).await;
            attempts += 1;
            progress.emit(&format!(
                "Checking progress (attempt {attempts})... This can take a few minutes."
            ));
            operation = self.service.poll(&operation).await?;
        }

        debug!(operation = %operation.name, attempts, "Operation completed");
        Ok(operation)
    }

    /// Best-effort audio merge. Any failure here degrades the request to the
    /// silent video rather than failing it.
    async fn merge_audio(
        &self,
        video: &[u8],
        track: &AudioTrack,
        id: &Uuid,
    ) -> anyhow::Result<PathBuf> {
        let audio = self.service.fetch(&track.url).await?;
        debug!(track = %track.id, bytes = audio.len(), "Fetched audio track");

        let merged = self.transcoder.merge(video, &audio).await?;

        let path = self.config.output_dir.join(format!("{id}-with-audio.mp4"));
        tokio::fs::write(&path, &merged).await?;
        Ok(path)
    }
}
