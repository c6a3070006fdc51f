//! Wire types for the generation service REST API.

use serde::{Deserialize, Serialize};

use vgen_models::VideoOperation;

/// Body of a `:predictLongRunning` submission.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateVideoRequest {
    pub instances: Vec<Instance>,
    pub parameters: Parameters,
}

#[derive(Debug, Serialize)]
pub(crate) struct Instance {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImagePayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImagePayload {
    pub bytes_base64_encoded: String,
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Parameters {
    pub aspect_ratio: String,
    pub sample_count: u32,
}

/// A long-running operation as reported by the service.
#[derive(Debug, Deserialize)]
pub(crate) struct OperationResponse {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    pub error: Option<OperationErrorBody>,
    pub response: Option<OperationResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OperationErrorBody {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OperationResult {
    pub generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateVideoResponse {
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedSample {
    pub video: Option<VideoRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoRef {
    pub uri: Option<String>,
}

impl OperationResponse {
    /// Flatten the wire shape into the neutral operation handle.
    pub(crate) fn into_operation(self) -> VideoOperation {
        let error = self.error.map(|e| {
            if e.message.is_empty() {
                format!("Operation failed with code {}", e.code)
            } else {
                e.message
            }
        });
        let video_uri = self
            .response
            .and_then(|r| r.generate_video_response)
            .and_then(|r| r.generated_samples.into_iter().next())
            .and_then(|s| s.video)
            .and_then(|v| v.uri);

        VideoOperation {
            name: self.name,
            done: self.done,
            error,
            video_uri,
        }
    }
}
