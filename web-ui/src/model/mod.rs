// UI models

pub mod analysis_state;
pub mod json_view;
pub mod selected_file;
pub mod toasts;

pub use analysis_state::AnalysisState;
pub use json_view::{highlight_json, Span, TokenKind};
pub use selected_file::{read_payloads, SelectedFile};
pub use toasts::{Toast, ToastAction, ToastQueue};
