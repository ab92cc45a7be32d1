//! Error Handling Module
//!
//! This module provides error handling for the Chargehound bindings, including:
//! - The crate error type (`ChargehoundError`) and classified API errors (`ApiError`)
//! - The status-to-kind taxonomy (`ErrorKind`)
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use chargehound::error::{ApiError, ErrorKind};
//!
//! let error = ApiError::new(404, "not found");
//! assert_eq!(error.kind, ErrorKind::NotFound);
//! assert_eq!(error.to_string(), "Not Found: not found");
//! ```

// Module declarations
mod conversions;
pub mod types;

// Re-exports for public API
pub use types::*;
