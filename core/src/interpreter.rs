// Interpretation of free-form model replies

use crate::models::{AnalysisOutcome, FallbackAnalysis};
use serde::Serialize;
use serde_json::{Map, Value};

const FENCE: &str = "```";

/// Model reply converted into a JSON body
///
/// Serializes untagged: the parsed object as-is, or the fallback object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Interpretation {
    /// A JSON object was found in the reply
    Parsed(Map<String, Value>),

    /// No JSON object could be extracted
    Fallback(FallbackAnalysis),
}

impl Interpretation {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Interpretation::Fallback(_))
    }

    /// The outcome a client decodes from this body
    pub fn into_outcome(self) -> AnalysisOutcome {
        match self {
            Interpretation::Parsed(object) => AnalysisOutcome::from_object(object),
            Interpretation::Fallback(fallback) => AnalysisOutcome::Fallback(fallback),
        }
    }
}

/// Extract the analysis object from a model reply
///
/// # Order
/// 1. The first fenced block (optionally language-tagged) whose body is `{...}`
/// 2. The span from the first `{` to the last `}` of the whole reply
/// 3. Otherwise the fallback shape carrying the unmodified reply
///
/// Only JSON objects are accepted. Never fails.
pub fn interpret_response(raw: &str) -> Interpretation {
    let from_fence = fenced_json_block(raw).and_then(parse_object);

    match from_fence.or_else(|| brace_span(raw).and_then(parse_object)) {
        Some(object) => Interpretation::Parsed(object),
        None => Interpretation::Fallback(FallbackAnalysis::new(raw)),
    }
}

/// Body of the first fenced block that looks like a JSON object
fn fenced_json_block(raw: &str) -> Option<&str> {
    let mut search_from = 0;

    while let Some(open) = raw[search_from..].find(FENCE) {
        let after_fence = search_from + open + FENCE.len();

        // Optional language tag such as `json`
        let tag_len = raw[after_fence..]
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(raw.len() - after_fence);
        let body_start = after_fence + tag_len;

        let close = raw[body_start..].find(FENCE)?;
        let body = raw[body_start..body_start + close].trim();
        if body.starts_with('{') && body.ends_with('}') {
            return Some(body);
        }

        search_from = body_start + close + FENCE.len();
    }

    None
}

/// First `{` through last `}`
fn brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (start < end).then(|| &raw[start..=end])
}

fn parse_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}
