//! Generation history records.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::{AspectRatio, GenerationRequest};

/// One successful generation, as persisted by the history store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryEntry {
    /// Unique entry id
    pub id: String,

    /// The prompt that produced the video
    pub prompt: String,

    /// File name of the seed image, if one was attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,

    /// Requested aspect ratio
    pub aspect_ratio: AspectRatio,

    /// Display name of the merged audio track, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_name: Option<String>,

    /// Where the playable artifact lives on disk
    pub video_path: PathBuf,

    /// When the generation completed
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Build an entry from the request that produced `video_path`.
    pub fn from_request(request: &GenerationRequest, video_path: PathBuf) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            prompt: request.prompt.clone(),
            image_name: request.image.as_ref().map(|i| i.file_name.clone()),
            aspect_ratio: request.aspect_ratio,
            audio_name: request.audio.as_ref().map(|a| a.name.clone()),
            video_path,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::AudioTrack;
    use url::Url;

    #[test]
    fn test_from_request_captures_metadata() {
        let request = GenerationRequest::new("sunset over a harbor").with_audio(AudioTrack {
            id: "cinematic".into(),
            name: "Cinematic".into(),
            url: Url::parse("https://example.com/cinematic.mp3").unwrap(),
        });
        let entry = HistoryEntry::from_request(&request, PathBuf::from("/videos/out.mp4"));

        assert_eq!(entry.prompt, "sunset over a harbor");
        assert_eq!(entry.audio_name.as_deref(), Some("Cinematic"));
        assert!(entry.image_name.is_none());
        assert_eq!(entry.video_path, PathBuf::from("/videos/out.mp4"));
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_entry_json_roundtrip() {
        let entry = HistoryEntry::from_request(
            &GenerationRequest::new("a red balloon"),
            PathBuf::from("out.mp4"),
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, entry.id);
        assert_eq!(back.prompt, entry.prompt);
        assert_eq!(back.created_at, entry.created_at);
    }
}
