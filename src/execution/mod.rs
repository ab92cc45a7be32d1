//! Request execution
//!
//! `http` holds the transport-facing building blocks; `executors` composes
//! them into the build → send → classify pipeline used by every resource.

pub mod executors;
pub mod http;
