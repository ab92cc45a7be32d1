//! Builder Helper Functions
//!
//! Shared utility functions for `ChargehoundBuilder`.

use crate::error::ChargehoundError;

/// Get API key with environment variable fallback
///
/// Priority: explicit parameter > environment variable `env_key`.
/// Empty values are treated as missing.
///
/// # Example
/// ```rust,ignore
/// let api_key = get_api_key_with_env(None, "CHARGEHOUND_API_KEY")?;
/// ```
pub fn get_api_key_with_env(
    api_key: Option<String>,
    env_key: &str,
) -> Result<String, ChargehoundError> {
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        return Ok(key);
    }

    match std::env::var(env_key) {
        Ok(v) if !v.is_empty() => Ok(v),
        _ => Err(ChargehoundError::Configuration(format!(
            "API key is required (missing {env_key} or explicit .api_key())"
        ))),
    }
}

/// Split a base URL such as `http://127.0.0.1:8080/v1/` into scheme, host
/// (with port) and base path. The base path always ends with `/`.
pub fn split_base_url(base_url: &str) -> Result<(String, String, String), ChargehoundError> {
    let url = reqwest::Url::parse(base_url).map_err(|e| {
        ChargehoundError::Configuration(format!("Invalid base URL '{base_url}': {e}"))
    })?;
    let host = url.host_str().ok_or_else(|| {
        ChargehoundError::Configuration(format!("Base URL '{base_url}' has no host"))
    })?;
    let host = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };
    let mut path = url.path().to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    Ok((url.scheme().to_string(), host, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSET_ENV: &str = "CHARGEHOUND_TEST_KEY_THAT_IS_NEVER_SET";

    #[test]
    fn explicit_key_wins() {
        let key = get_api_key_with_env(Some("test-key".to_string()), UNSET_ENV).unwrap();
        assert_eq!(key, "test-key");
    }

    #[test]
    fn missing_key_is_configuration_error() {
        let err = get_api_key_with_env(None, UNSET_ENV).unwrap_err();
        assert!(matches!(err, ChargehoundError::Configuration(_)));
        assert!(err.to_string().contains(UNSET_ENV));

        let err = get_api_key_with_env(Some(String::new()), UNSET_ENV).unwrap_err();
        assert!(matches!(err, ChargehoundError::Configuration(_)));
    }

    #[test]
    fn split_keeps_port_and_path() {
        let (scheme, host, path) = split_base_url("http://127.0.0.1:8080").unwrap();
        assert_eq!(scheme, "http");
        assert_eq!(host, "127.0.0.1:8080");
        assert_eq!(path, "/");

        let (_, host, path) = split_base_url("https://api.chargehound.com/v1").unwrap();
        assert_eq!(host, "api.chargehound.com");
        assert_eq!(path, "/v1/");
    }

    #[test]
    fn split_rejects_relative_urls() {
        assert!(split_base_url("api.chargehound.com").is_err());
    }
}
