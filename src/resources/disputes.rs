//! Disputes resource.
//!
//! Each operation is a fixed composition of request building, one transport
//! call and response classification; they differ only in method, path and
//! body/query. See <https://www.chargehound.com/docs/api/index.html#disputes>.

use crate::client::Chargehound;
use crate::error::ChargehoundError;
use crate::execution::executors::{build_request, execute_request};
use crate::types::{
    CallOptions, CreateDisputeParams, Dispute, DisputeList, DisputeResponse, DisputeUpdate,
    ListDisputesParams, ResourceResult,
};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

const COLLECTION: &str = "disputes";

/// Handle to the disputes resource, borrowed from a [`Chargehound`] client.
#[derive(Debug, Clone, Copy)]
pub struct Disputes<'a> {
    client: &'a Chargehound,
}

impl<'a> Disputes<'a> {
    pub(crate) fn new(client: &'a Chargehound) -> Self {
        Self { client }
    }

    /// Create a dispute. `POST /disputes`
    pub async fn create(
        &self,
        params: &CreateDisputeParams,
        options: Option<&CallOptions>,
    ) -> Result<ResourceResult<Dispute>, ChargehoundError> {
        self.send(Method::POST, COLLECTION.to_string(), Some(encode(params)?), &[], options)
            .await
    }

    /// Retrieve a dispute. `GET /disputes/{id}`
    pub async fn retrieve(
        &self,
        id: &str,
        options: Option<&CallOptions>,
    ) -> Result<ResourceResult<Dispute>, ChargehoundError> {
        self.send(Method::GET, item_path(id, None)?, None, &[], options)
            .await
    }

    /// Retrieve the evidence response of a submitted dispute. `GET /disputes/{id}/response`
    pub async fn response(
        &self,
        id: &str,
        options: Option<&CallOptions>,
    ) -> Result<ResourceResult<DisputeResponse>, ChargehoundError> {
        self.send(Method::GET, item_path(id, Some("response"))?, None, &[], options)
            .await
    }

    /// List disputes, newest first. `GET /disputes`
    pub async fn list(
        &self,
        params: &ListDisputesParams,
        options: Option<&CallOptions>,
    ) -> Result<ResourceResult<DisputeList>, ChargehoundError> {
        let query = params.to_query();
        self.send(Method::GET, COLLECTION.to_string(), None, &query, options)
            .await
    }

    /// Update the evidence of a dispute without submitting it. `PUT /disputes/{id}`
    pub async fn update(
        &self,
        id: &str,
        update: &DisputeUpdate,
        options: Option<&CallOptions>,
    ) -> Result<ResourceResult<Dispute>, ChargehoundError> {
        self.send(Method::PUT, item_path(id, None)?, Some(encode(update)?), &[], options)
            .await
    }

    /// Submit (or queue, with `queue`) the evidence of a dispute. `POST /disputes/{id}/submit`
    pub async fn submit(
        &self,
        id: &str,
        update: &DisputeUpdate,
        options: Option<&CallOptions>,
    ) -> Result<ResourceResult<Dispute>, ChargehoundError> {
        let path = item_path(id, Some("submit"))?;
        self.send(Method::POST, path, Some(encode(update)?), &[], options)
            .await
    }

    /// Accept a dispute instead of contesting it. `POST /disputes/{id}/accept`
    pub async fn accept(
        &self,
        id: &str,
        options: Option<&CallOptions>,
    ) -> Result<ResourceResult<Dispute>, ChargehoundError> {
        self.send(Method::POST, item_path(id, Some("accept"))?, None, &[], options)
            .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        body: Option<Vec<u8>>,
        query: &[(&str, String)],
        options: Option<&CallOptions>,
    ) -> Result<ResourceResult<T>, ChargehoundError> {
        let config = self.client.config();
        let request = build_request(config, method, &path, body, query)?;
        execute_request(config, options, request).await
    }
}

// URL parsing resolves dot segments (also when percent-encoded), so these
// ids would address a different endpoint.
fn item_path(id: &str, action: Option<&str>) -> Result<String, ChargehoundError> {
    if matches!(id, "" | "." | "..") {
        return Err(ChargehoundError::Configuration(format!(
            "Invalid dispute id '{id}'"
        )));
    }
    let id = urlencoding::encode(id);
    Ok(match action {
        Some(action) => format!("{COLLECTION}/{id}/{action}"),
        None => format!("{COLLECTION}/{id}"),
    })
}

fn encode<T: Serialize>(body: &T) -> Result<Vec<u8>, ChargehoundError> {
    serde_json::to_vec(body).map_err(|e| {
        ChargehoundError::Configuration(format!("Failed to serialize request body: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_paths() {
        assert_eq!(item_path("dp_xxx", None).unwrap(), "disputes/dp_xxx");
        assert_eq!(
            item_path("dp_xxx", Some("accept")).unwrap(),
            "disputes/dp_xxx/accept"
        );
        assert_eq!(
            item_path("dp_xxx", Some("response")).unwrap(),
            "disputes/dp_xxx/response"
        );
    }

    #[test]
    fn empty_and_dot_ids_are_rejected() {
        for id in ["", ".", ".."] {
            let err = item_path(id, Some("accept")).unwrap_err();
            assert!(matches!(err, ChargehoundError::Configuration(_)), "id {id:?}");
        }
        assert_eq!(item_path("...", None).unwrap(), "disputes/...");
    }

    #[test]
    fn ids_are_percent_encoded() {
        assert_eq!(item_path("a/b c", None).unwrap(), "disputes/a%2Fb%20c");
    }

    #[test]
    fn sparse_body_encoding() {
        let body = encode(&DisputeUpdate::new().queue(true)).unwrap();
        assert_eq!(body, br#"{"queue":true}"#);
    }
}
