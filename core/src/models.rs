// Core data models for the Writing Style Profiler

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Analysis invocation ID (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub uuid::Uuid);

impl AnalysisId {
    /// Generate a new random analysis ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name and size of a user-supplied document.
///
/// Implemented by every file representation the intake validator
/// has to judge (metadata only, in-memory bytes, browser file handles).
pub trait FileMeta {
    fn name(&self) -> &str;
    fn size(&self) -> u64;
}

/// Uploaded file metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// File name (used for extension check and display)
    pub name: String,

    /// Size in bytes
    pub size: u64,

    /// Declared MIME type (advisory only)
    pub mime_type: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let mime_type = mime_type_for(&name).to_string();
        Self {
            name,
            size,
            mime_type,
        }
    }
}

impl FileMeta for UploadedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// File contents ready to be sent for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl FilePayload {
    /// Create a payload, inferring the MIME type from the file name
    /// when none was declared.
    pub fn new(name: impl Into<String>, mime_type: Option<String>, data: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = match mime_type {
            Some(declared) if !declared.trim().is_empty() => declared,
            _ => mime_type_for(&name).to_string(),
        };
        Self {
            name,
            mime_type,
            data,
        }
    }
}

impl FileMeta for FilePayload {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Canonical MIME type for a file name
pub fn mime_type_for(name: &str) -> &'static str {
    match crate::validation::file_extension(name).as_str() {
        ".txt" => "text/plain",
        ".pdf" => "application/pdf",
        ".docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Severity of a validation diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The file was rejected
    Error,
    /// The accepted set was truncated
    Warning,
}

/// User-facing message produced during file intake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

impl Diagnostic {
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Word-level observations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diction {
    pub word_choice: String,
    pub word_economy: String,
    pub notable_word_choices: Vec<String>,
}

/// Sentence-level observations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Syntax {
    pub sentence_structure: String,
    pub average_sentence_length_words: f64,
}

/// Tone and rhetorical appeals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tone {
    pub overall_tone: String,
    pub rhetorical_appeals_used: Vec<String>,
}

/// Structured writing style analysis
///
/// Fields missing from the model's reply deserialize to empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub overall_style_summary: String,
    pub diction: Diction,
    pub syntax: Syntax,
    pub tone: Tone,
    pub rhetorical_patterns: String,
    pub narrative_perspective: String,
}

/// Degraded result when the model reply is not a JSON object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackAnalysis {
    /// The model's reply, unmodified
    pub raw_response: String,

    pub analysis_summary: String,
}

impl FallbackAnalysis {
    pub const SUMMARY: &'static str =
        "Analysis completed but response format could not be parsed as JSON";

    pub fn new(raw_response: impl Into<String>) -> Self {
        Self {
            raw_response: raw_response.into(),
            analysis_summary: Self::SUMMARY.to_string(),
        }
    }
}

/// Analysis result as received by the client
///
/// A structured reply is kept exactly as the server sent it: no schema is
/// enforced, unknown keys survive and missing keys stay missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Fallback(FallbackAnalysis),
    Structured(Map<String, Value>),
}

impl AnalysisOutcome {
    /// Classify a response object. It is the fallback shape when it carries
    /// both `raw_response` and `analysis_summary` as strings.
    pub fn from_object(object: Map<String, Value>) -> Self {
        match (object.get("raw_response"), object.get("analysis_summary")) {
            (Some(Value::String(raw)), Some(Value::String(summary))) => {
                AnalysisOutcome::Fallback(FallbackAnalysis {
                    raw_response: raw.clone(),
                    analysis_summary: summary.clone(),
                })
            }
            _ => AnalysisOutcome::Structured(object),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisOutcome::Fallback(_))
    }

    /// Typed reading of a structured reply, for display only.
    /// `None` for the fallback or when a field has an unexpected type.
    pub fn typed(&self) -> Option<AnalysisResult> {
        match self {
            AnalysisOutcome::Structured(object) => {
                serde_json::from_value(Value::Object(object.clone())).ok()
            }
            AnalysisOutcome::Fallback(_) => None,
        }
    }

    /// Pretty-printed JSON (what the copy button puts on the clipboard)
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for AnalysisOutcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(AnalysisOutcome::from_object)
    }
}

/// API Error Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Model credential absent
    pub fn missing_api_key() -> Self {
        Self {
            error: "Google Gemini AI API key is not configured. Please contact the administrator."
                .to_string(),
        }
    }

    /// Request carried no files
    pub fn no_files() -> Self {
        Self {
            error: "No files provided for analysis. Please select at least one file.".to_string(),
        }
    }

    /// A file could not be read while preparing the model request
    pub fn file_processing(name: &str) -> Self {
        Self {
            error: format!(
                "Failed to process file \"{}\". The file may be corrupted or in an unsupported format.",
                name
            ),
        }
    }

    /// Request body exceeded the upload limit
    pub fn request_too_large() -> Self {
        Self {
            error: "The upload is too large. At most 5 files of up to 10MB each can be analyzed."
                .to_string(),
        }
    }

    /// Model rejected the credential
    pub fn configuration_error() -> Self {
        Self {
            error: "AI service configuration error. Please try again later.".to_string(),
        }
    }

    /// Model unreachable
    pub fn network_error() -> Self {
        Self {
            error: "Network error. Please check your connection and try again.".to_string(),
        }
    }

    /// Anything else
    pub fn analysis_failed(message: impl std::fmt::Display) -> Self {
        Self {
            error: format!("Analysis failed: {}", message),
        }
    }
}
