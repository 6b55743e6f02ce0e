// Writing Style Profiler - Core Library

pub mod interpreter;
pub mod models;
pub mod validation;

pub use interpreter::*;
pub use models::*;
pub use validation::*;
