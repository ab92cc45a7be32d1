//! HTTP configuration and call-scoped types.
//!
//! This module defines `HttpConfig`, used to build the default transport,
//! `CallOptions` for per-call overrides, and `ResourceResult`, the value every
//! resource operation returns.

use crate::execution::http::transport::HttpTransport;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::time::Duration;

/// HTTP configuration for the default `reqwest` transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout
    #[serde(with = "duration_option_serde")]
    pub timeout: Option<Duration>,
    /// Connection timeout
    #[serde(with = "duration_option_serde")]
    pub connect_timeout: Option<Duration>,
    /// Proxy settings
    pub proxy: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(crate::defaults::http::REQUEST_TIMEOUT),
            connect_timeout: Some(crate::defaults::http::CONNECT_TIMEOUT),
            proxy: None,
        }
    }
}

// Helper module for Duration serialization
mod duration_option_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => d.as_secs().serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs: Option<u64> = Option::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Per-call overrides.
///
/// Pass `Some(&options)` to a resource operation to route that single call
/// through a different transport; the client's default is left untouched.
#[derive(Clone, Default)]
pub struct CallOptions {
    /// Transport used instead of the client's default for this call
    pub transport: Option<Arc<dyn HttpTransport>>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the call through `transport`.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }
}

impl fmt::Debug for CallOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallOptions")
            .field("transport", &self.transport.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

/// A decoded payload together with the HTTP status it was received with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceResult<T> {
    /// The decoded payload
    pub data: T,
    /// HTTP status code observed on the response
    pub status: u16,
}

impl<T> ResourceResult<T> {
    pub fn new(data: T, status: u16) -> Self {
        Self { data, status }
    }

    /// Discard the status and return the payload.
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Deref for ResourceResult<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for ResourceResult<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}
