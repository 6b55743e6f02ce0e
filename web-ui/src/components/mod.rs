// Components module

pub mod analysis_viewer;
pub mod copy_button;
pub mod file_upload;
pub mod info_panel;
pub mod toast_list;

pub use analysis_viewer::AnalysisViewer;
pub use copy_button::CopyButton;
pub use file_upload::FileUpload;
pub use info_panel::InfoPanel;
pub use toast_list::ToastList;
