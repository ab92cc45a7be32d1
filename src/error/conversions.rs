//! Type Conversions for ChargehoundError
//!
//! This module contains From trait implementations for converting
//! common error types into ChargehoundError.

use super::types::ChargehoundError;

// From implementations
impl From<reqwest::Error> for ChargehoundError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ChargehoundError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: ChargehoundError = json_err.into();
        assert!(matches!(err, ChargehoundError::Decode(_)));
        assert!(err.status_code().is_none());
    }

    #[tokio::test]
    async fn test_from_reqwest_error() {
        // Nothing listens on port 9 of the discard address; the connect fails.
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:9/")
            .send()
            .await
            .unwrap_err();
        let err: ChargehoundError = err.into();
        assert!(matches!(err, ChargehoundError::Transport(_)));
    }
}
