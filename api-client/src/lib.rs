// API client library for the Writing Style Profiler
//
// This crate provides HTTP client functionality for communicating
// with the analysis server from the browser-based frontend.

pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use errors::ApiError;
pub use http_client::analyze_files;
