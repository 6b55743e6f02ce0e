// generateContent request/response bodies

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum Part<'a> {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: Blob<'a>,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Blob<'a> {
    pub mime_type: &'a str,
    /// Base64 (standard alphabet)
    pub data: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Candidate {
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ResponseContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}
