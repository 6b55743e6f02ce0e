// Shared application state

use crate::config::ServerConfig;
use gemini_client::{AnalysisModel, ClientError, GeminiClient};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Text generation backend; `None` while no credential is configured
    pub model: Option<Arc<dyn AnalysisModel>>,
}

impl AppState {
    pub fn new(model: Arc<dyn AnalysisModel>) -> Self {
        Self { model: Some(model) }
    }

    /// State for a server started without a model credential
    pub fn unconfigured() -> Self {
        Self { model: None }
    }

    /// Build the Gemini-backed state from configuration
    pub fn from_config(config: &ServerConfig) -> Result<Self, ClientError> {
        match config.gemini() {
            Some(gemini) => Ok(Self::new(Arc::new(GeminiClient::new(gemini)?))),
            None => Ok(Self::unconfigured()),
        }
    }
}
