//! Client behavior against a mocked service endpoint.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vgen_client::{ClientConfig, ClientError, VideoClient};
use vgen_models::{AspectRatio, GenerationRequest, SeedImage, VideoOperation};

const API_KEY: &str = "test-key";

async fn client_for(server: &MockServer) -> VideoClient {
    VideoClient::new(
        ClientConfig::default()
            .with_api_key(API_KEY)
            .with_base_url(server.uri()),
    )
    .expect("client construction")
}

#[tokio::test]
async fn submit_posts_prompt_image_and_aspect_ratio() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/veo-2.0-generate-001:predictLongRunning"))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "operations/op-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = GenerationRequest::new("a cat on a skateboard")
        .with_aspect_ratio(AspectRatio::Portrait)
        .with_image(SeedImage {
            bytes: vec![1, 2, 3],
            media_type: "image/png".into(),
            file_name: "seed.png".into(),
        });

    let operation = client.submit(&request).await.unwrap();
    assert_eq!(operation.name, "operations/op-1");
    assert!(!operation.done);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["instances"][0]["prompt"], "a cat on a skateboard");
    assert_eq!(body["instances"][0]["image"]["mimeType"], "image/png");
    assert_eq!(body["instances"][0]["image"]["bytesBase64Encoded"], "AQID");
    assert_eq!(body["parameters"]["aspectRatio"], "9:16");
    assert_eq!(body["parameters"]["sampleCount"], 1);
}

#[tokio::test]
async fn poll_maps_a_completed_operation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/operations/op-2"))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "operations/op-2",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [
                        {"video": {"uri": "https://service/files/clip-9"}}
                    ]
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let refreshed = client
        .poll(&VideoOperation::pending("operations/op-2"))
        .await
        .unwrap();

    assert!(refreshed.done);
    assert_eq!(refreshed.video_uri.as_deref(), Some("https://service/files/clip-9"));
}

#[tokio::test]
async fn download_appends_the_credential_and_returns_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/clip-9"))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"video bytes".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let uri = format!("{}/files/clip-9", server.uri());
    let bytes = client.download(&uri).await.unwrap();
    assert_eq!(bytes, b"video bytes");
}

#[tokio::test]
async fn download_failure_carries_the_transport_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let uri = format!("{}/files/missing", server.uri());
    let err = client.download(&uri).await.unwrap_err();
    assert!(matches!(err, ClientError::Download { status: 404 }));
}

#[tokio::test]
async fn submit_rejection_becomes_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/veo-2.0-generate-001:predictLongRunning"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("API key not valid. Check credentials."),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .submit(&GenerationRequest::new("anything"))
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("Invalid API key"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
