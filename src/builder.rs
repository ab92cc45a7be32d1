//! Client builder.
//!
//! ```rust,ignore
//! use chargehound::prelude::*;
//! use std::time::Duration;
//!
//! let client = Chargehound::builder()
//!     .api_key("test_123")
//!     .api_version("2017-10-30")
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//! ```

use crate::client::Chargehound;
use crate::config::ClientConfig;
use crate::defaults;
use crate::error::ChargehoundError;
use crate::execution::http::interceptor::HttpInterceptor;
use crate::execution::http::transport::{HttpTransport, ReqwestTransport};
use crate::types::HttpConfig;
use crate::utils::builder_helpers::{get_api_key_with_env, split_base_url};
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`Chargehound`] clients.
///
/// Endpoint precedence: explicit `scheme`/`host`/`base_path` > `base_url` > defaults.
#[derive(Clone, Default)]
pub struct ChargehoundBuilder {
    api_key: Option<String>,
    api_version: Option<String>,
    base_url: Option<String>,
    scheme: Option<String>,
    host: Option<String>,
    base_path: Option<String>,
    http_config: HttpConfig,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl ChargehoundBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key. Falls back to `CHARGEHOUND_API_KEY` when not set.
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Pin the API version sent in the `Chargehound-Version` header.
    pub fn api_version<S: Into<String>>(mut self, version: S) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Point the client at `scheme://host[:port][/base/path]`.
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn scheme<S: Into<String>>(mut self, scheme: S) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn base_path<S: Into<String>>(mut self, base_path: S) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    // === HTTP Basic Configuration ===

    /// Set request timeout of the default transport
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout of the default transport
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = Some(timeout);
        self
    }

    /// Route the default transport through a proxy
    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.http_config.proxy = Some(proxy.into());
        self
    }

    /// Replace the whole HTTP configuration
    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Use a preconfigured `reqwest::Client` for the default transport.
    ///
    /// The HTTP configuration (timeouts, proxy) is ignored in that case.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the default transport entirely.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Add an HTTP interceptor (applied in insertion order).
    pub fn with_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Chargehound, ChargehoundError> {
        let api_key = get_api_key_with_env(self.api_key, defaults::api::API_KEY_ENV)?;

        let transport: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => Arc::new(ReqwestTransport::from_config(&self.http_config)?),
        };

        let mut config = ClientConfig::new(api_key, transport);
        if let Some(base_url) = &self.base_url {
            let (scheme, host, base_path) = split_base_url(base_url)?;
            config.scheme = scheme;
            config.host = host;
            config.base_path = base_path;
        }
        if let Some(scheme) = self.scheme {
            config.scheme = scheme;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        config.api_version = self.api_version.filter(|v| !v.is_empty());
        config.interceptors = self.interceptors;

        tracing::debug!(target: "chargehound::client", base_url=%config.base_url(), api_version=?config.api_version(), "client configured");
        Ok(Chargehound::from_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_api() {
        let client = ChargehoundBuilder::new().api_key("k").build().unwrap();
        let config = client.config();
        assert_eq!(config.base_url(), "https://api.chargehound.com/v1/");
        assert!(config.api_version().is_none());
        assert!(config.interceptors().is_empty());
    }

    #[test]
    fn base_url_then_explicit_parts() {
        let client = ChargehoundBuilder::new()
            .api_key("k")
            .base_url("http://127.0.0.1:8080")
            .base_path("/v1/")
            .build()
            .unwrap();
        assert_eq!(client.config().base_url(), "http://127.0.0.1:8080/v1/");
    }

    #[test]
    fn empty_api_version_is_dropped() {
        let client = ChargehoundBuilder::new()
            .api_key("k")
            .api_version("")
            .build()
            .unwrap();
        assert!(client.config().api_version().is_none());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ChargehoundBuilder::new()
            .api_key("k")
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, ChargehoundError::Configuration(_)));
    }

    #[test]
    fn custom_transport_becomes_default() {
        let transport: Arc<dyn HttpTransport> =
            Arc::new(ReqwestTransport::new(reqwest::Client::new()));
        let client = ChargehoundBuilder::new()
            .api_key("k")
            .with_transport(transport.clone())
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(client.config().transport(), &transport));
    }
}
