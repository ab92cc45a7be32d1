//! Types Module
//!
//! Data shapes exchanged with the Chargehound API plus the call-scoped
//! request/response wrappers.

pub mod dispute;
pub mod http;
pub mod params;

pub use dispute::*;
pub use http::*;
pub use params::*;
