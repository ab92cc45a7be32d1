//! HTTP client builder utilities
//!
//! Builds the `reqwest::Client` behind the default transport.

use crate::error::ChargehoundError;
use crate::types::HttpConfig;

/// Build an HTTP client from HttpConfig
///
/// # Arguments
/// * `config` - HTTP configuration containing timeouts and proxy
///
/// # Returns
/// * `Ok(reqwest::Client)` - Configured HTTP client
/// * `Err(ChargehoundError)` - Configuration or build error
pub fn build_http_client_from_config(
    config: &HttpConfig,
) -> Result<reqwest::Client, ChargehoundError> {
    let mut builder = reqwest::Client::builder();

    // Apply timeout settings
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    // Apply proxy settings
    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
            ChargehoundError::Configuration(format!("Invalid proxy URL: {e}"))
        })?;
        builder = builder.proxy(proxy);
    }

    builder.build().map_err(|e| {
        ChargehoundError::Configuration(format!("Failed to create HTTP client: {e}"))
    })
}
