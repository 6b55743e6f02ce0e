// API handlers

use crate::errors::AnalyzeError;
use crate::state::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Json, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gemini_client::ANALYSIS_PROMPT;
use serde_json::json;
use style_profiler_core::{interpret_response, AnalysisId, FilePayload, Interpretation};

/// Multipart field carrying the documents
pub const FILES_FIELD: &str = "files";

/// GET /api/health - Health check endpoint
pub async fn health(State(state): State<AppState>) -> Response {
    let health_status = json!({
        "status": "healthy",
        "service": "style-profiler-api",
        "version": env!("CARGO_PKG_VERSION"),
        "model_configured": state.model.is_some(),
    });

    (StatusCode::OK, Json(health_status)).into_response()
}

/// POST /api/analyze - Analyze the writing style of the uploaded files
#[tracing::instrument(name = "analyze", skip_all, fields(request_id = %AnalysisId::new()))]
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Interpretation>, AnalyzeError> {
    let result = run_analysis(state, multipart).await;
    if let Err(e) = &result {
        tracing::error!("Analysis failed: {}", e);
    }
    result.map(Json)
}

async fn run_analysis(
    state: AppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Interpretation, AnalyzeError> {
    // Credential check comes before the body is read
    let model = state.model.ok_or(AnalyzeError::MissingApiKey)?;

    let multipart = multipart.map_err(|rejection| AnalyzeError::Form(rejection.body_text()))?;
    let files = read_files(multipart).await?;
    if files.is_empty() {
        return Err(AnalyzeError::NoFiles);
    }

    let total_bytes: usize = files.iter().map(|f| f.data.len()).sum();
    tracing::info!(files = files.len(), total_bytes, "Sending files for analysis");

    let reply = model.generate(&files, ANALYSIS_PROMPT).await?;
    tracing::debug!(reply = %reply, "Raw model reply");

    let interpretation = interpret_response(&reply);
    if interpretation.is_fallback() {
        tracing::warn!("Model reply is not a JSON object, returning raw response");
    } else {
        tracing::info!("Analysis completed");
    }

    Ok(interpretation)
}

/// Collect every `files` field; other fields are ignored
async fn read_files(mut multipart: Multipart) -> Result<Vec<FilePayload>, AnalyzeError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AnalyzeError::PayloadTooLarge
        } else {
            AnalyzeError::Form(e.body_text())
        }
    })? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }

        let name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("file_{}", files.len() + 1));
        let mime_type = field.content_type().map(str::to_string);

        let data = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AnalyzeError::PayloadTooLarge
            } else {
                AnalyzeError::FileProcessing {
                    name: name.clone(),
                    reason: e.body_text(),
                }
            }
        })?;

        tracing::debug!(file = %name, bytes = data.len(), "Read uploaded file");
        files.push(FilePayload::new(name, mime_type, data.to_vec()));
    }

    Ok(files)
}
