//! Core error types.

use crate::types::dispute::null_as_default;
use serde::Deserialize;
use thiserror::Error;

/// Stable classification of a remote API error, derived from its status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalServerError,
    Generic,
}

impl ErrorKind {
    /// Map a status code to its kind. Anything outside the fixed table is `Generic`.
    pub const fn from_status(status: i64) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::InternalServerError,
            _ => Self::Generic,
        }
    }

    /// Human readable label used as the prefix of an [`ApiError`] message.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::InternalServerError => "Server Error",
            Self::Generic => "Error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified error returned by the Chargehound API.
///
/// `kind` is always `ErrorKind::from_status(status)`; construct through
/// [`ApiError::new`] or [`ApiError::from_envelope`] to keep that true.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .kind.label())]
pub struct ApiError {
    /// Status reported inside the error envelope, which may be any integer
    pub status: i64,
    /// Kind derived from `status`
    pub kind: ErrorKind,
    /// Message reported by the API, verbatim
    pub message: String,
    /// Machine readable error type reported by the API (if any)
    pub error_type: Option<String>,
    /// Request URL echoed back by the API (if any)
    pub url: Option<String>,
    /// Whether the request was made in live mode (if reported)
    pub livemode: Option<bool>,
}

impl ApiError {
    pub fn new(status: i64, message: impl Into<String>) -> Self {
        Self {
            status,
            kind: ErrorKind::from_status(status),
            message: message.into(),
            error_type: None,
            url: None,
            livemode: None,
        }
    }

    /// Build an error from a decoded error envelope.
    pub fn from_envelope(envelope: ErrorEnvelope) -> Self {
        let ErrorEnvelope {
            error,
            url,
            livemode,
        } = envelope;
        Self {
            error_type: error.error_type,
            url,
            livemode,
            ..Self::new(error.status, error.message)
        }
    }
}

/// Wire shape of an error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub livemode: Option<bool>,
}

/// The `error` member of an [`ErrorEnvelope`].
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
}

/// Errors produced by the Chargehound client.
#[derive(Debug, Error)]
pub enum ChargehoundError {
    /// The API answered with a classified error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response body (success or error) did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid client configuration or request construction, detected before any I/O.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ChargehoundError {
    /// Status code of a classified API error.
    pub fn status_code(&self) -> Option<i64> {
        self.as_api_error().map(|e| e.status)
    }

    /// Kind of a classified API error.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.as_api_error().map(|e| e.kind)
    }

    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}
