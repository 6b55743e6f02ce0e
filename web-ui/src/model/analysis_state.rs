// Analysis lifecycle

use style_profiler_core::AnalysisOutcome;

/// Where the current analysis invocation stands
///
/// Exactly one of loading / result / error is present at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Loading,
    Success(AnalysisOutcome),
    Failed(String),
}

impl AnalysisState {
    /// A request is in flight; the analyze button is disabled
    pub fn is_busy(&self) -> bool {
        matches!(self, AnalysisState::Loading)
    }

    /// Whether a new analysis may start for `file_count` staged files
    pub fn can_start(&self, file_count: usize) -> bool {
        !self.is_busy() && file_count > 0
    }

    pub fn result(&self) -> Option<&AnalysisOutcome> {
        match self {
            AnalysisState::Success(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Begin a new attempt, discarding any previous result or error.
    /// Returns `None` while another attempt is still in flight.
    pub fn start(&self) -> Option<AnalysisState> {
        (!self.is_busy()).then_some(AnalysisState::Loading)
    }

    pub fn finish(result: Result<AnalysisOutcome, String>) -> AnalysisState {
        match result {
            Ok(outcome) => AnalysisState::Success(outcome),
            Err(message) => AnalysisState::Failed(message),
        }
    }
}
