//! HTTP Utilities
//!
//! This module contains HTTP-related utilities:
//! - HTTP client configuration
//! - Header management
//! - HTTP interceptors
//! - The transport abstraction and its `reqwest` implementation

pub mod client;
pub mod headers;
pub mod interceptor;
pub mod transport;

// Re-export main types
pub use client::*;
pub use headers::*;
pub use interceptor::*;
pub use transport::*;
