//! HTTP response classification
//!
//! Turns a raw transport response into either a decoded payload or a
//! classified error. Status < 400 decodes the payload; anything else must
//! carry a well-formed error envelope.

use crate::error::{ApiError, ChargehoundError, ErrorEnvelope};
use crate::execution::http::transport::HttpTransportResponse;
use crate::types::ResourceResult;
use serde::de::DeserializeOwned;

/// Decode `response` into `T`, or into a classified error when the status is >= 400.
pub fn classify_response<T: DeserializeOwned>(
    response: &HttpTransportResponse,
) -> Result<ResourceResult<T>, ChargehoundError> {
    if response.status >= 400 {
        return Err(classify_http_error(&response.body));
    }
    let data = serde_json::from_slice(&response.body)?;
    Ok(ResourceResult::new(data, response.status))
}

/// Decode an error body. A body that is not an error envelope yields a
/// decode error rather than a classified one.
pub fn classify_http_error(body: &[u8]) -> ChargehoundError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => ApiError::from_envelope(envelope).into(),
        Err(e) => ChargehoundError::Decode(e),
    }
}
