//! Integration tests for the portfolio backend.

use std::path::PathBuf;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::{Config, DEFAULT_DOWNLOAD_PASSWORD};
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

fn test_config(cv_path: Option<PathBuf>) -> Config {
    Config {
        download_password: DEFAULT_DOWNLOAD_PASSWORD.to_string(),
        cv_path,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        log_level: "warn".to_string(),
    }
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_config(test_config(None)).await
    }

    async fn with_config(config: Config) -> Self {
        let state = AppState::new(config);
        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_download(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url("/api/download-cv"))
            .json(body)
            .send()
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_get_resume() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/resume"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["contact"]["name"], "Akmal Suhaimi");
    assert!(body["data"]["experience"].as_array().unwrap().len() >= 3);
    // Wire format is camelCase
    assert!(body["data"]["experience"][0]["workMode"].is_string());
    assert!(body["data"]["aboutMe"]["funFacts"].is_array());
}

#[tokio::test]
async fn test_download_missing_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture.post_download(&json!({})).await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Password is required");
}

#[tokio::test]
async fn test_download_empty_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture.post_download(&json!({ "password": "" })).await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["message"], "Password is required");
}

#[tokio::test]
async fn test_download_no_body() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/download-cv"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["message"], "Password is required");
}

#[tokio::test]
async fn test_download_wrong_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post_download(&json!({ "password": "letmein" }))
        .await;
    assert_eq!(resp.status(), 401);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    assert_eq!(body["error"]["message"], "Invalid password");
}

#[tokio::test]
async fn test_download_password_is_case_sensitive() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post_download(&json!({ "password": "0224f699d5#" }))
        .await;
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_download_password_not_trimmed() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post_download(&json!({ "password": " 0224F699D5#" }))
        .await;
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_download_correct_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post_download(&json!({ "password": DEFAULT_DOWNLOAD_PASSWORD }))
        .await;
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(
        content_type,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );

    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("Akmal_Suhaimi_CV.docx"));

    let bytes = resp.bytes().await.unwrap();
    assert!(!bytes.is_empty());
    // OOXML documents are ZIP containers
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn test_download_is_idempotent() {
    let fixture = TestFixture::new().await;

    let first = fixture
        .post_download(&json!({ "password": DEFAULT_DOWNLOAD_PASSWORD }))
        .await;
    let first_status = first.status();
    let first_bytes = first.bytes().await.unwrap();

    let second = fixture
        .post_download(&json!({ "password": DEFAULT_DOWNLOAD_PASSWORD }))
        .await;
    assert_eq!(second.status(), first_status);
    assert_eq!(second.bytes().await.unwrap(), first_bytes);

    // Repeated failures stay failures; no lockout, no state between requests
    for _ in 0..3 {
        let resp = fixture.post_download(&json!({ "password": "nope" })).await;
        assert_eq!(resp.status(), 401);
    }
    let resp = fixture
        .post_download(&json!({ "password": DEFAULT_DOWNLOAD_PASSWORD }))
        .await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_download_custom_password_from_config() {
    let mut config = test_config(None);
    config.download_password = "deployment-secret".to_string();
    let fixture = TestFixture::with_config(config).await;

    let resp = fixture
        .post_download(&json!({ "password": DEFAULT_DOWNLOAD_PASSWORD }))
        .await;
    assert_eq!(resp.status(), 401);

    let resp = fixture
        .post_download(&json!({ "password": "deployment-secret" }))
        .await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_download_file_backed_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let cv_path = temp_dir.path().join("cv.docx");
    tokio::fs::write(&cv_path, b"PK\x03\x04 fake docx payload")
        .await
        .unwrap();

    let fixture = TestFixture::with_config(test_config(Some(cv_path))).await;

    let resp = fixture
        .post_download(&json!({ "password": DEFAULT_DOWNLOAD_PASSWORD }))
        .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.bytes().await.unwrap().as_ref(),
        b"PK\x03\x04 fake docx payload"
    );
}

#[tokio::test]
async fn test_download_missing_artifact_is_500() {
    let temp_dir = TempDir::new().unwrap();
    let cv_path = temp_dir.path().join("does-not-exist.docx");

    let fixture = TestFixture::with_config(test_config(Some(cv_path))).await;

    let resp = fixture
        .post_download(&json!({ "password": DEFAULT_DOWNLOAD_PASSWORD }))
        .await;
    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"]["message"], "Failed to read CV file");

    // A bad password still short-circuits before the artifact load
    let resp = fixture.post_download(&json!({ "password": "nope" })).await;
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/nope"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
