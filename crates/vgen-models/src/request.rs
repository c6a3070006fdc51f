//! Generation request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::AspectRatio;

/// Seed image attached to a generation request to guide the first frame.
#[derive(Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeedImage {
    /// Raw image bytes
    pub bytes: Vec<u8>,
    /// Media type, e.g. `image/png`
    pub media_type: String,
    /// Display name shown in the history
    pub file_name: String,
}

// Manual Debug so multi-megabyte image payloads never end up in logs.
impl std::fmt::Debug for SeedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedImage")
            .field("media_type", &self.media_type)
            .field("file_name", &self.file_name)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}

/// A background audio track to merge into the generated video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AudioTrack {
    /// Stable identifier, e.g. `cinematic`
    pub id: String,
    /// Display name
    pub name: String,
    /// Where the track is fetched from
    pub url: Url,
}

/// A single video generation request. Immutable once submitted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// Text prompt describing the video
    pub prompt: String,

    /// Optional seed image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<SeedImage>,

    /// Target aspect ratio
    #[serde(default)]
    pub aspect_ratio: AspectRatio,

    /// Optional background audio track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioTrack>,
}

impl GenerationRequest {
    /// Create a request with just a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
            aspect_ratio: AspectRatio::default(),
            audio: None,
        }
    }

    /// Attach a seed image.
    pub fn with_image(mut self, image: SeedImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the aspect ratio.
    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Attach a background audio track.
    pub fn with_audio(mut self, audio: AudioTrack) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Check the request is submittable. The prompt must contain at least one
    /// non-whitespace character.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.prompt.trim().is_empty() {
            return Err(RequestError::EmptyPrompt);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Prompt must not be empty")]
    EmptyPrompt,
}
