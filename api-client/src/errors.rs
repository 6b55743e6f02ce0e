// API client errors

/// API client error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be built from the selected files
    RequestError(String),
    /// The request could not be sent
    NetworkError(String),
    /// Server answered with a non-success status
    ServerError(String),
    /// Server answered 200 but the body is not an analysis
    InvalidResponse(String),
}

impl ApiError {
    /// Message shown to the user
    pub fn message(&self) -> &str {
        match self {
            ApiError::RequestError(msg)
            | ApiError::NetworkError(msg)
            | ApiError::ServerError(msg)
            | ApiError::InvalidResponse(msg) => msg,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiError {}
