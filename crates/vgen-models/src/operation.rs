//! Remote operation handles.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Opaque handle to an asynchronous generation job on the remote service.
///
/// Created by submission, refreshed by polling, terminal once `done` is set.
/// On a terminal handle at most one of `error` and `video_uri` is populated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VideoOperation {
    /// Server-side operation name, e.g. `operations/abc123`
    pub name: String,

    /// Completion flag; never unset once true
    #[serde(default)]
    pub done: bool,

    /// Error message reported by the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Locator of the produced video resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_uri: Option<String>,
}

impl VideoOperation {
    /// A freshly submitted, still-running operation.
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
            error: None,
            video_uri: None,
        }
    }

    /// A completed operation carrying a video locator.
    pub fn succeeded(name: impl Into<String>, video_uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: true,
            error: None,
            video_uri: Some(video_uri.into()),
        }
    }

    /// A completed operation carrying a service error.
    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: true,
            error: Some(message.into()),
            video_uri: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let op = VideoOperation::pending("operations/1");
        assert!(!op.done);
        assert!(op.error.is_none() && op.video_uri.is_none());

        let op = VideoOperation::succeeded("operations/1", "https://cdn/video.mp4");
        assert!(op.done && op.error.is_none());
        assert_eq!(op.video_uri.as_deref(), Some("https://cdn/video.mp4"));

        let op = VideoOperation::failed("operations/1", "quota exhausted");
        assert!(op.done && op.video_uri.is_none());
        assert_eq!(op.error.as_deref(), Some("quota exhausted"));
    }

    #[test]
    fn test_done_defaults_to_false_in_json() {
        let op: VideoOperation = serde_json::from_str(r#"{"name":"operations/7"}"#).unwrap();
        assert!(!op.done);
    }
}
