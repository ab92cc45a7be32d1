//! Default Configuration Values
//!
//! This module centralizes all default values used by the client.
//! Having defaults in one place makes them easier to maintain, document, and adjust.

use std::time::Duration;

/// API endpoint defaults
pub mod api {
    /// Default API host
    pub const HOST: &str = "api.chargehound.com";

    /// Default URL scheme
    pub const SCHEME: &str = "https";

    /// Default base path, prefixed to every resource path
    pub const BASE_PATH: &str = "/v1/";

    /// Header carrying the pinned API version (only sent when configured)
    pub const VERSION_HEADER: &str = "Chargehound-Version";

    /// Environment variable consulted when no API key is given explicitly
    pub const API_KEY_ENV: &str = "CHARGEHOUND_API_KEY";
}

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Default connection timeout for establishing HTTP connections
    ///
    /// Set to 10 seconds which is sufficient for most network conditions
    /// while not being too aggressive.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Product segment of the User-Agent header
    pub const PRODUCT: &str = "Chargehound/v1";

    /// Bindings name of the User-Agent header
    pub const BINDINGS: &str = "RustBindings";

    /// Version of these bindings, reported in the User-Agent header
    pub const BINDINGS_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Default User-Agent string for HTTP requests
    pub fn user_agent(version: &str) -> String {
        format!("{PRODUCT} {BINDINGS}/{version}")
    }
}
