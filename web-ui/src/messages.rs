// Notification levels and their presentation

use style_profiler_core::Severity;

/// Notification level for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl From<Severity> for ToastLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => ToastLevel::Error,
            Severity::Warning => ToastLevel::Warning,
        }
    }
}

/// Get CSS class for toast level
pub fn toast_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast success",
        ToastLevel::Info => "toast",
        ToastLevel::Warning => "toast warning",
        ToastLevel::Error => "toast error",
    }
}

pub const NO_FILES_TITLE: &str = "No files selected";
pub const NO_FILES_DESCRIPTION: &str = "Please select at least one file to analyze";
pub const ANALYSIS_COMPLETE_TITLE: &str = "Analysis completed successfully";
pub const ANALYSIS_COMPLETE_DESCRIPTION: &str = "Your writing style analysis is ready to view";
pub const ANALYSIS_PARTIAL_DESCRIPTION: &str =
    "The response could not be structured. Showing the raw model output.";
pub const ANALYSIS_FAILED_TITLE: &str = "Analysis failed";
pub const COPY_SUCCESS_TITLE: &str = "Copied to clipboard";
pub const COPY_SUCCESS_DESCRIPTION: &str = "Analysis results copied successfully";
pub const COPY_FAILED_TITLE: &str = "Failed to copy";
pub const COPY_FAILED_DESCRIPTION: &str = "Unable to copy analysis results to clipboard";

/// File size as shown next to a selected file
pub fn format_size_kb(size: u64) -> String {
    format!("{:.1} KB", size as f64 / 1024.0)
}
