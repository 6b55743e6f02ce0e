// Gemini HTTP client

use crate::errors::ClientError;
use crate::model::AnalysisModel;
use crate::wire::{Blob, Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, Part};
use async_trait::async_trait;
use base64::Engine;
use std::time::Duration;
use style_profiler_core::FilePayload;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Connection settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Gemini client for multimodal style analysis
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: GeminiConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl AnalysisModel for GeminiClient {
    async fn generate(&self, files: &[FilePayload], prompt: &str) -> Result<String, ClientError> {
        let engine = base64::engine::general_purpose::STANDARD;

        // Documents first, instruction last
        let mut parts: Vec<Part<'_>> = files
            .iter()
            .map(|file| Part::InlineData {
                inline_data: Blob {
                    mime_type: &file.mime_type,
                    data: engine.encode(&file.data),
                },
            })
            .collect();
        parts.push(Part::Text { text: prompt });

        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        tracing::debug!(
            model = %self.config.model,
            files = files.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string()
                });
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        Ok(body.text())
    }
}
