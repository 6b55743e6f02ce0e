// HTTP client for the analysis API

use crate::errors::ApiError;
use mime_guess::mime::Mime;
use reqwest::multipart::{Form, Part};
use std::env;
use style_profiler_core::{mime_type_for, AnalysisOutcome, ErrorResponse, FilePayload};

const NETWORK_ERROR_MESSAGE: &str =
    "Unable to reach the analysis server. Please check your connection and try again.";

fn get_api_base_url() -> String {
    env::var("API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8080".to_string())
}

fn file_part(file: FilePayload) -> Result<Part, ApiError> {
    let FilePayload {
        name,
        mime_type,
        data,
    } = file;

    // An unparseable declared type is replaced by the one implied by the name
    let mime_type = match mime_type.parse::<Mime>() {
        Ok(_) => mime_type,
        Err(_) => mime_type_for(&name).to_string(),
    };

    Part::bytes(data)
        .file_name(name.clone())
        .mime_str(&mime_type)
        .map_err(|_| {
            ApiError::RequestError(format!("Failed to prepare file \"{}\" for upload.", name))
        })
}

/// Send files to the analysis endpoint
///
/// # Arguments
/// * `files` - Documents to analyze jointly (at most 5, already validated)
///
/// # Returns
/// The structured analysis, or the fallback shape when the model replied in prose
pub async fn analyze_files(files: Vec<FilePayload>) -> Result<AnalysisOutcome, ApiError> {
    let mut form = Form::new();
    for file in files {
        form = form.part("files", file_part(file)?);
    }

    let client = reqwest::Client::new();
    let api_base_url = get_api_base_url();
    let response = client
        .post(format!("{}/api/analyze", api_base_url))
        .multipart(form)
        .send()
        .await
        .map_err(|_| ApiError::NetworkError(NETWORK_ERROR_MESSAGE.to_string()))?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<AnalysisOutcome>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read analysis result: {}", e)))
    } else {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP error: {}", status),
        };
        Err(ApiError::ServerError(message))
    }
}
