//! Chargehound client.
//!
//! A [`Chargehound`] is cheap to clone and safe to share across tasks; all
//! clones use the same configuration and default transport.

use crate::builder::ChargehoundBuilder;
use crate::config::ClientConfig;
use crate::error::ChargehoundError;
use crate::resources::Disputes;
use std::sync::Arc;

/// Parameters accepted by [`Chargehound::from_params`].
#[derive(Debug, Clone, Default)]
pub struct ClientParams {
    pub api_key: String,
    /// Optional API version pinned through the `Chargehound-Version` header
    pub api_version: Option<String>,
}

/// Entry point of the bindings.
#[derive(Debug, Clone)]
pub struct Chargehound {
    config: Arc<ClientConfig>,
}

impl Chargehound {
    /// Client for the public API using `api_key` and the default transport.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ChargehoundError> {
        Self::builder().api_key(api_key).build()
    }

    /// Client from explicit parameters.
    pub fn from_params(params: ClientParams) -> Result<Self, ChargehoundError> {
        let mut builder = Self::builder().api_key(params.api_key);
        if let Some(version) = params.api_version {
            builder = builder.api_version(version);
        }
        builder.build()
    }

    pub fn builder() -> ChargehoundBuilder {
        ChargehoundBuilder::new()
    }

    /// Wrap an already assembled configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Disputes resource.
    pub fn disputes(&self) -> Disputes<'_> {
        Disputes::new(self)
    }
}
