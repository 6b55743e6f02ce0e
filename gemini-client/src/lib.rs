// Gemini Client Library
//
// This crate provides HTTP client functionality for sending documents
// to the Google Gemini generateContent API for style analysis.

mod client;
mod errors;
mod model;
mod wire;

pub use client::{GeminiClient, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
pub use errors::ClientError;
pub use model::{AnalysisModel, ANALYSIS_PROMPT};
