//! Client configuration.
//!
//! `ClientConfig` is immutable once built; every operation borrows it
//! read-only, so one client can serve concurrent calls.

use crate::defaults;
use crate::execution::http::interceptor::HttpInterceptor;
use crate::execution::http::transport::HttpTransport;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::Arc;

/// Settings shared by every request issued through a client.
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) api_key: SecretString,
    pub(crate) host: String,
    pub(crate) scheme: String,
    pub(crate) base_path: String,
    pub(crate) version: String,
    pub(crate) api_version: Option<String>,
    pub(crate) transport: Arc<dyn HttpTransport>,
    pub(crate) interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl ClientConfig {
    /// Configuration with the public API endpoint and no pinned API version.
    pub fn new(api_key: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            host: defaults::api::HOST.to_string(),
            scheme: defaults::api::SCHEME.to_string(),
            base_path: defaults::api::BASE_PATH.to_string(),
            version: defaults::http::BINDINGS_VERSION.to_string(),
            api_version: None,
            transport,
            interceptors: Vec::new(),
        }
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Version of these bindings as reported in the User-Agent.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Pinned API version, if any.
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref().filter(|v| !v.is_empty())
    }

    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    pub fn interceptors(&self) -> &[Arc<dyn HttpInterceptor>] {
        &self.interceptors
    }

    /// `<scheme>://<host><base_path>`
    pub fn base_url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.host, self.base_path)
    }

    pub fn user_agent(&self) -> String {
        defaults::http::user_agent(&self.version)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("host", &self.host)
            .field("scheme", &self.scheme)
            .field("base_path", &self.base_path)
            .field("version", &self.version)
            .field("api_version", &self.api_version)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::http::transport::ReqwestTransport;

    fn config() -> ClientConfig {
        ClientConfig::new(
            "sk_test_secret",
            Arc::new(ReqwestTransport::new(reqwest::Client::new())),
        )
    }

    #[test]
    fn defaults_point_at_public_api() {
        let config = config();
        assert_eq!(config.base_url(), "https://api.chargehound.com/v1/");
        assert!(config.api_version().is_none());
        assert!(
            config
                .user_agent()
                .starts_with("Chargehound/v1 RustBindings/")
        );
    }

    #[test]
    fn empty_api_version_counts_as_unset() {
        let mut config = config();
        config.api_version = Some(String::new());
        assert!(config.api_version().is_none());
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", config());
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("sk_test_secret"));
    }
}
