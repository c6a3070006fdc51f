//! Generation service client.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use vgen_engine::{GenerationService, ServiceError};
use vgen_models::{GenerationRequest, VideoOperation};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::types::{
    GenerateVideoRequest, ImagePayload, Instance, OperationResponse, Parameters,
};

/// Client for the remote video generation service.
#[derive(Debug)]
pub struct VideoClient {
    http: Client,
    config: ClientConfig,
    api_key: String,
}

impl VideoClient {
    /// Create a new client. Fails if the credential is absent, before any
    /// network activity.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            ClientError::MissingCredential(
                "API key not configured. Set the VGEN_API_KEY environment variable; \
                 the application cannot connect to the generation service without it."
                    .to_string(),
            )
        })?;

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            config,
            api_key,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Submit a generation request; returns the initial operation handle.
    pub async fn submit(&self, request: &GenerationRequest) -> ClientResult<VideoOperation> {
        let url = format!(
            "{}/models/{}:predictLongRunning?key={}",
            self.config.base_url, self.config.model, self.api_key
        );

        let body = GenerateVideoRequest {
            instances: vec![Instance {
                prompt: request.prompt.clone(),
                image: request.image.as_ref().map(|image| ImagePayload {
                    bytes_base64_encoded: BASE64.encode(&image.bytes),
                    mime_type: image.media_type.clone(),
                }),
            }],
            parameters: Parameters {
                aspect_ratio: request.aspect_ratio.as_str().to_string(),
                sample_count: 1,
            },
        };

        debug!(model = %self.config.model, "Submitting generation request");
        let response = self.http.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::api(status, body));
        }

        let operation: OperationResponse = response.json().await?;
        let operation = operation.into_operation();
        info!(operation = %operation.name, "Generation operation created");
        Ok(operation)
    }

    /// Refresh an operation's status. Idempotent.
    pub async fn poll(&self, operation: &VideoOperation) -> ClientResult<VideoOperation> {
        let url = format!(
            "{}/{}?key={}",
            self.config.base_url, operation.name, self.api_key
        );

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::api(status, body));
        }

        let refreshed: OperationResponse = response.json().await?;
        Ok(refreshed.into_operation())
    }

    /// Download the produced video. The service's file locators require the
    /// credential as a query parameter.
    pub async fn download(&self, uri: &str) -> ClientResult<Vec<u8>> {
        let separator = if uri.contains('?') { '&' } else { '?' };
        let url = format!("{uri}{separator}key={}", self.api_key);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Download {
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!(bytes = bytes.len(), "Downloaded video resource");
        Ok(bytes.to_vec())
    }

    /// Plain fetch of an auxiliary asset such as an audio track.
    pub async fn fetch(&self, url: &Url) -> ClientResult<Vec<u8>> {
        let response = self.http.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Download {
                status: response.status().as_u16(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

impl From<ClientError> for ServiceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::MissingCredential(message) => ServiceError::MissingCredential(message),
            ClientError::Api { message, .. } => ServiceError::Remote { message },
            ClientError::Download { status } => ServiceError::Download { status },
            ClientError::Network(e) => ServiceError::transport(e.to_string()),
            ClientError::Json(e) => ServiceError::transport(format!("malformed response: {e}")),
        }
    }
}

#[async_trait]
impl GenerationService for VideoClient {
    async fn submit(&self, request: &GenerationRequest) -> Result<VideoOperation, ServiceError> {
        VideoClient::submit(self, request).await.map_err(Into::into)
    }

    async fn poll(&self, operation: &VideoOperation) -> Result<VideoOperation, ServiceError> {
        VideoClient::poll(self, operation).await.map_err(Into::into)
    }

    async fn download(&self, uri: &str) -> Result<Vec<u8>, ServiceError> {
        VideoClient::download(self, uri).await.map_err(Into::into)
    }

    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, ServiceError> {
        VideoClient::fetch(self, url).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_is_rejected_at_construction() {
        let err = VideoClient::new(ClientConfig::default()).unwrap_err();
        assert!(matches!(err, ClientError::MissingCredential(_)));
        assert!(err.to_string().contains("VGEN_API_KEY"));
    }
}
