// Generative model abstraction

use crate::errors::ClientError;
use async_trait::async_trait;
use style_profiler_core::FilePayload;

/// Fixed instruction sent after the documents
pub const ANALYSIS_PROMPT: &str = r#"You are an expert literary and rhetorical analyst. Analyze the provided files for their writing style and return only a structured JSON object based on the schema.

Please provide a comprehensive analysis covering:
1. Overall style summary
2. Diction (word choice, economy, notable choices)
3. Syntax (sentence structure, average length)
4. Tone (overall tone, rhetorical appeals)
5. Rhetorical patterns
6. Narrative perspective

Schema:
{
  "overall_style_summary": string,
  "diction": { "word_choice": string, "word_economy": string, "notable_word_choices": [string] },
  "syntax": { "sentence_structure": string, "average_sentence_length_words": number },
  "tone": { "overall_tone": string, "rhetorical_appeals_used": [string] },
  "rhetorical_patterns": string,
  "narrative_perspective": string
}

Analyze all the provided files together and give a comprehensive assessment."#;

/// A text generation backend that accepts documents inline
///
/// The API server holds one of these for its whole lifetime; tests
/// substitute their own implementation.
#[async_trait]
pub trait AnalysisModel: Send + Sync {
    /// Send all files plus the prompt in one request and return the reply text
    async fn generate(&self, files: &[FilePayload], prompt: &str) -> Result<String, ClientError>;
}
