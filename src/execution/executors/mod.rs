//! Executors
//!
//! The build → send → classify pipeline shared by every resource operation.

pub mod errors;
pub mod http_request;

pub use errors::{classify_http_error, classify_response};
pub use http_request::{build_request, execute_request};
