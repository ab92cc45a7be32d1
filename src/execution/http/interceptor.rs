//! HTTP Interceptor interfaces
//!
//! Interceptors observe the request pipeline: the outbound request right
//! before it is handed to the transport, the raw response, and any error.
//! They cannot rewrite or retry a request; returning an error from
//! `on_before_send` aborts the call before any I/O.
//!
//! Built-in `tracing` events are emitted whether or not interceptors are
//! installed.

use crate::error::ChargehoundError;
use crate::execution::http::transport::{HttpTransportRequest, HttpTransportResponse};
use reqwest::Method;

/// Context describing one request, shared by the transport and interceptors.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    /// Client-generated id used to correlate log events of one call
    pub request_id: String,
    pub method: Method,
    pub url: String,
}

impl HttpRequestContext {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            request_id: generate_request_id(),
            method,
            url: url.into(),
        }
    }
}

/// Generate a fresh request id.
pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before the request is handed to the transport.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        _request: &HttpTransportRequest,
    ) -> Result<(), ChargehoundError> {
        Ok(())
    }

    /// Called when the transport returned a response, before classification.
    fn on_response(&self, _ctx: &HttpRequestContext, _response: &HttpTransportResponse) {}

    /// Called when an error occurs during sending or classification.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &ChargehoundError) {}
}
