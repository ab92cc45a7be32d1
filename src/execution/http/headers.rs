//! HTTP Headers Utility
//!
//! Builds the header set every Chargehound request carries.

use crate::error::ChargehoundError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{
    AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add HTTP Basic authorization with `username` and an empty password
    pub fn with_basic_auth(mut self, username: &str) -> Result<Self, ChargehoundError> {
        let encoded = STANDARD.encode(format!("{username}:"));
        let mut value = HeaderValue::from_str(&format!("Basic {encoded}")).map_err(|e| {
            ChargehoundError::Configuration(format!("Invalid API key format: {e}"))
        })?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Add user agent
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, ChargehoundError> {
        self.headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| {
                ChargehoundError::Configuration(format!("Invalid user agent: {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add a custom header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ChargehoundError> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ChargehoundError::Configuration(format!("Invalid header name '{name}': {e}"))
        })?;
        self.headers.insert(
            header_name,
            HeaderValue::from_str(value).map_err(|e| {
                ChargehoundError::Configuration(format!("Invalid value for header '{name}': {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add the API version header when a non-empty version is pinned.
    pub fn with_api_version(self, version: Option<&str>) -> Result<Self, ChargehoundError> {
        match version.filter(|v| !v.is_empty()) {
            Some(v) => self.with_header(crate::defaults::api::VERSION_HEADER, v),
            None => Ok(self),
        }
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
