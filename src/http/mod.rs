//! HTTP protocol layer module
//!
//! Input extraction and response building, decoupled from the endpoint logic.

pub mod body;
pub mod query;
pub mod response;

// Re-export commonly used builders
pub use response::{build_error_response, build_not_found_response, build_result_response};
