// Client errors

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// The provider rejected the credential
    pub fn is_credential_error(&self) -> bool {
        match self {
            ClientError::Api { status, message } => {
                *status == 401 || *status == 403 || message.contains("API key")
            }
            _ => false,
        }
    }
}
