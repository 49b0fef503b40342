use agri_core::submission::{SubmissionClient, SubmissionError, SubmissionReceipt};
use agri_server::records::RecordWriter;
use agri_server::{create_router, MAX_BODY_BYTES};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn app_in(dir: &Path) -> Router {
    create_router(Arc::new(RecordWriter::new(dir)))
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/farmer")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn each_submission_gets_its_own_record() {
    let dir = TempDir::new().unwrap();
    let payload = json!({"name": "Asha", "farmSize": "2ha"});

    let (status, body) = send(app_in(dir.path()), post_json(payload.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    let first: SubmissionReceipt = serde_json::from_slice(&body).unwrap();
    assert_eq!(first.message, "Farmer info saved!");
    assert!(!first.file.is_empty());

    let (status, body) = send(app_in(dir.path()), post_json(payload.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    let second: SubmissionReceipt = serde_json::from_slice(&body).unwrap();
    assert_ne!(first.file, second.file);

    for file in [&first.file, &second.file] {
        let stored: Value = serde_json::from_str(&std::fs::read_to_string(file).unwrap()).unwrap();
        assert_eq!(stored, payload);
    }
}

#[tokio::test]
async fn any_json_shape_is_accepted() {
    let dir = TempDir::new().unwrap();
    for payload in [json!([1, 2, 3]), json!("just text"), json!({"nested": {"deep": [null]}})] {
        let (status, _) = send(app_in(dir.path()), post_json(payload.to_string())).await;
        assert_eq!(status, StatusCode::OK, "payload {payload}");
    }
}

#[tokio::test]
async fn write_failure_returns_static_error() {
    let dir = TempDir::new().unwrap();
    let app = app_in(&dir.path().join("missing"));

    let (status, body) = send(app, post_json(r#"{"name":"Asha"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error: SubmissionError = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "Failed to save farmer info.");
}

#[tokio::test]
async fn malformed_json_is_rejected_without_writing() {
    let dir = TempDir::new().unwrap();

    let (status, _) = send(app_in(dir.path()), post_json("{not json")).await;

    assert!(status.is_client_error());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let dir = TempDir::new().unwrap();
    let padding = "a".repeat(MAX_BODY_BYTES + 1);
    let body = format!("{{\"padding\":\"{}\"}}", padding);

    let (status, _) = send(app_in(dir.path()), post_json(body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let dir = TempDir::new().unwrap();
    let request = Request::builder()
        .method("POST")
        .uri("/api/farmer")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::from(r#"{"name":"Asha"}"#))
        .unwrap();

    let response = app_in(dir.path()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = TempDir::new().unwrap();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app_in(dir.path()), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn client_submits_to_running_server() {
    let dir = TempDir::new().unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app_in(dir.path());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = SubmissionClient::new(&format!("http://{}", addr));
    let receipt = client
        .submit(&json!({"name": "Asha", "cropType": "Maize"}))
        .await
        .unwrap();

    assert_eq!(receipt.message, "Farmer info saved!");
    assert!(Path::new(&receipt.file).exists());
}

#[tokio::test]
async fn client_surfaces_server_error_message() {
    let dir = TempDir::new().unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app_in(&dir.path().join("missing"));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = SubmissionClient::new(&format!("http://{}", addr));
    let err = client.submit(&json!({"name": "Asha"})).await.unwrap_err();

    assert!(err.to_string().contains("Failed to save farmer info."));
}
