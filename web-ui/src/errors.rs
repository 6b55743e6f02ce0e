// Web UI error types

/// Web UI specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A selected file could not be read into memory
    FileRead(String),
    /// Clipboard write was refused
    Clipboard(String),
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::FileRead(name) => write!(
                f,
                "Failed to process file \"{}\". The file may be corrupted or in an unsupported format.",
                name
            ),
            UiError::Clipboard(msg) => write!(f, "Could not copy to clipboard: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}
