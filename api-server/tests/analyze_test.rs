// End-to-end tests for the analysis endpoint

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use gemini_client::{AnalysisModel, ClientError, ANALYSIS_PROMPT};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use style_profiler_api_server::{build_router, build_router_with_limit, AppState};
use style_profiler_core::FilePayload;
use tower::ServiceExt;

const BOUNDARY: &str = "----profiler-test-boundary";

// ========================================
// Test helpers
// ========================================

enum Reply {
    Text(&'static str),
    ApiError(u16, &'static str),
}

/// Model stand-in that records what it was sent
struct FakeModel {
    reply: Reply,
    calls: Mutex<Vec<(Vec<FilePayload>, String)>>,
}

impl FakeModel {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(Vec<FilePayload>, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisModel for FakeModel {
    async fn generate(&self, files: &[FilePayload], prompt: &str) -> Result<String, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((files.to_vec(), prompt.to_string()));
        match &self.reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::ApiError(status, message) => Err(ClientError::Api {
                status: *status,
                message: message.to_string(),
            }),
        }
    }
}

struct Part<'a> {
    field: &'a str,
    file_name: Option<&'a str>,
    content_type: Option<&'a str>,
    data: &'a [u8],
}

fn file_part<'a>(file_name: &'a str, content_type: &'a str, data: &'a [u8]) -> Part<'a> {
    Part {
        field: "files",
        file_name: Some(file_name),
        content_type: Some(content_type),
        data,
    }
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part.file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    part.field, file_name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.field).as_bytes(),
            ),
        }
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn analyze_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

// ========================================
// POST /api/analyze
// ========================================

#[tokio::test]
async fn test_zero_files_is_bad_request() {
    let model = FakeModel::new(Reply::Text("{}"));
    let app = build_router(AppState::new(model.clone()));

    let (status, body) = send(app, analyze_request(&[])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "No files provided for analysis. Please select at least one file."})
    );
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn test_other_fields_are_ignored() {
    let model = FakeModel::new(Reply::Text("{}"));
    let app = build_router(AppState::new(model.clone()));

    let note = Part {
        field: "note",
        file_name: None,
        content_type: None,
        data: b"hello",
    };
    let (status, _) = send(app, analyze_request(&[note])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn test_missing_api_key() {
    let app = build_router(AppState::unconfigured());

    let (status, body) = send(
        app,
        analyze_request(&[file_part("essay.txt", "text/plain", b"It was a dark night.")]),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Google Gemini AI API key is not configured. Please contact the administrator."
    );
}

#[tokio::test]
async fn test_structured_reply() {
    let model = FakeModel::new(Reply::Text(
        "Here you go:\n```json\n{\"overall_style_summary\": \"x\", \"syntax\": {\"sentence_structure\": \"varied\", \"average_sentence_length_words\": 14}}\n```",
    ));
    let app = build_router(AppState::new(model.clone()));

    let (status, body) = send(
        app,
        analyze_request(&[
            file_part("essay.txt", "text/plain", b"It was a dark night."),
            file_part("paper.pdf", "application/pdf", b"%PDF-1.7"),
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "overall_style_summary": "x",
            "syntax": {"sentence_structure": "varied", "average_sentence_length_words": 14}
        })
    );

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    let (files, prompt) = &calls[0];
    assert_eq!(prompt, ANALYSIS_PROMPT);
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "essay.txt");
    assert_eq!(files[0].mime_type, "text/plain");
    assert_eq!(files[0].data, b"It was a dark night.".to_vec());
    assert_eq!(files[1].name, "paper.pdf");
}

#[tokio::test]
async fn test_prose_reply_falls_back() {
    let model = FakeModel::new(Reply::Text("I could not analyze this."));
    let app = build_router(AppState::new(model));

    let (status, body) = send(
        app,
        analyze_request(&[file_part("essay.txt", "text/plain", b"text")]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "raw_response": "I could not analyze this.",
            "analysis_summary": "Analysis completed but response format could not be parsed as JSON"
        })
    );
}

#[tokio::test]
async fn test_missing_part_content_type_is_inferred() {
    let model = FakeModel::new(Reply::Text("{}"));
    let app = build_router(AppState::new(model.clone()));

    let part = Part {
        field: "files",
        file_name: Some("chapter.docx"),
        content_type: None,
        data: b"PK",
    };
    let (status, _) = send(app, analyze_request(&[part])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        model.calls()[0].0[0].mime_type,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
}

#[tokio::test]
async fn test_rejected_credential() {
    let model = FakeModel::new(Reply::ApiError(400, "API key not valid. Please pass a valid API key."));
    let app = build_router(AppState::new(model));

    let (status, body) = send(
        app,
        analyze_request(&[file_part("essay.txt", "text/plain", b"text")]),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "AI service configuration error. Please try again later."
    );
}

#[tokio::test]
async fn test_model_failure() {
    let model = FakeModel::new(Reply::ApiError(500, "Internal error encountered."));
    let app = build_router(AppState::new(model.clone()));

    let (status, body) = send(
        app,
        analyze_request(&[file_part("essay.txt", "text/plain", b"text")]),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Analysis failed: Gemini API error (500): Internal error encountered."
    );
    // No automatic retry
    assert_eq!(model.calls().len(), 1);
}

#[tokio::test]
async fn test_truncated_file_part() {
    let model = FakeModel::new(Reply::Text("{}"));
    let app = build_router(AppState::new(model.clone()));

    // Stream ends inside the part: no closing boundary
    let body = format!(
        "--{}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"essay.txt\"\r\n\
         Content-Type: text/plain\r\n\r\nIt was a dark",
        BOUNDARY
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to process file \"essay.txt\". The file may be corrupted or in an unsupported format."})
    );
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn test_oversized_upload_is_json_error() {
    let model = FakeModel::new(Reply::Text("{}"));
    let app = build_router_with_limit(AppState::new(model.clone()), 1024);

    let data = vec![b'a'; 4096];
    let (status, body) = send(
        app,
        analyze_request(&[file_part("essay.txt", "text/plain", &data)]),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        body["error"],
        "The upload is too large. At most 5 files of up to 10MB each can be analyzed."
    );
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn test_non_multipart_request() {
    let model = FakeModel::new(Reply::Text("{}"));
    let app = build_router(AppState::new(model.clone()));

    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Analysis failed: "));
    assert!(model.calls().is_empty());
}

// ========================================
// GET /api/health
// ========================================

#[tokio::test]
async fn test_health() {
    let app = build_router(AppState::unconfigured());

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_configured"], false);
}
