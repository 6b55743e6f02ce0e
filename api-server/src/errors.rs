// Analysis request errors

use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use gemini_client::ClientError;
use style_profiler_core::ErrorResponse;

/// Failures of POST /api/analyze
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("model API key is not configured")]
    MissingApiKey,

    #[error("no files provided")]
    NoFiles,

    #[error("failed to read file \"{name}\": {reason}")]
    FileProcessing { name: String, reason: String },

    #[error("request body exceeds the upload limit")]
    PayloadTooLarge,

    #[error("malformed form data: {0}")]
    Form(String),

    #[error(transparent)]
    Model(#[from] ClientError),
}

impl AnalyzeError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnalyzeError::NoFiles => StatusCode::BAD_REQUEST,
            AnalyzeError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the user
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            AnalyzeError::MissingApiKey => ErrorResponse::missing_api_key(),
            AnalyzeError::NoFiles => ErrorResponse::no_files(),
            AnalyzeError::FileProcessing { name, .. } => ErrorResponse::file_processing(name),
            AnalyzeError::PayloadTooLarge => ErrorResponse::request_too_large(),
            AnalyzeError::Form(reason) => ErrorResponse::analysis_failed(reason),
            AnalyzeError::Model(e) if e.is_credential_error() => {
                ErrorResponse::configuration_error()
            }
            AnalyzeError::Model(ClientError::Network(_)) => ErrorResponse::network_error(),
            AnalyzeError::Model(e) => ErrorResponse::analysis_failed(e),
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_error_response())).into_response()
    }
}
