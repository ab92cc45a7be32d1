//! HTTP transport abstraction.
//!
//! Every request is handed to an [`HttpTransport`] as a fully built
//! [`HttpTransportRequest`]. The client owns a default transport backed by
//! `reqwest`; a call may substitute its own through
//! [`CallOptions`](crate::types::CallOptions), e.g. to observe the final
//! URL/headers/body or to return a synthetic response in tests.

use crate::error::ChargehoundError;
use crate::execution::http::interceptor::HttpRequestContext;
use crate::types::{CallOptions, HttpConfig};
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;
use std::sync::Arc;

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub ctx: HttpRequestContext,
    pub method: Method,
    /// Fully qualified URL, query string included
    pub url: String,
    pub headers: HeaderMap,
    /// Serialized JSON body, if the operation sends one
    pub body: Option<Vec<u8>>,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Executes a single request. Implementations must not retry.
///
/// Failures that never produced a response are reported as
/// [`ChargehoundError::Transport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, ChargehoundError>;
}

/// Pick the transport for one call: the per-call override when present,
/// otherwise the client's default.
pub fn select_transport<'a>(
    options: Option<&'a CallOptions>,
    default: &'a Arc<dyn HttpTransport>,
) -> &'a Arc<dyn HttpTransport> {
    options
        .and_then(|o| o.transport.as_ref())
        .unwrap_or(default)
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build a transport with a fresh client configured from `config`.
    pub fn from_config(config: &HttpConfig) -> Result<Self, ChargehoundError> {
        crate::execution::http::client::build_http_client_from_config(config).map(Self::new)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, ChargehoundError> {
        let HttpTransportRequest {
            method,
            url,
            headers,
            body,
            ..
        } = request;

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::http::interceptor::HttpRequestContext;

    struct Canned(u16);

    #[async_trait]
    impl HttpTransport for Canned {
        async fn execute(
            &self,
            _request: HttpTransportRequest,
        ) -> Result<HttpTransportResponse, ChargehoundError> {
            Ok(HttpTransportResponse {
                status: self.0,
                headers: HeaderMap::new(),
                body: Vec::new(),
            })
        }
    }

    fn request(method: Method, url: String, body: Option<Vec<u8>>) -> HttpTransportRequest {
        HttpTransportRequest {
            ctx: HttpRequestContext::new(method.clone(), url.clone()),
            method,
            url,
            headers: HeaderMap::new(),
            body,
        }
    }

    #[tokio::test]
    async fn selector_prefers_override() {
        let default: Arc<dyn HttpTransport> = Arc::new(Canned(200));
        let custom: Arc<dyn HttpTransport> = Arc::new(Canned(201));
        let options = CallOptions::new().with_transport(custom.clone());

        let chosen = select_transport(Some(&options), &default);
        assert!(Arc::ptr_eq(chosen, &custom));

        let resp = chosen
            .execute(request(Method::GET, "http://x.test/".into(), None))
            .await
            .unwrap();
        assert_eq!(resp.status, 201);
    }

    #[test]
    fn selector_falls_back_to_default() {
        let default: Arc<dyn HttpTransport> = Arc::new(Canned(200));
        assert!(Arc::ptr_eq(select_transport(None, &default), &default));

        let empty = CallOptions::new();
        assert!(Arc::ptr_eq(select_transport(Some(&empty), &default), &default));
    }

    #[tokio::test]
    async fn reqwest_transport_sends_method_headers_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/v1/disputes/dp_1")
            .match_header("x-test", "yes")
            .match_body(r#"{"force":true}"#)
            .with_status(202)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"dp_1"}"#)
            .create_async()
            .await;

        let transport = ReqwestTransport::from_config(&HttpConfig::default()).unwrap();
        let mut req = request(
            Method::PUT,
            format!("{}/v1/disputes/dp_1", server.url()),
            Some(br#"{"force":true}"#.to_vec()),
        );
        req.headers.insert("x-test", "yes".parse().unwrap());

        let resp = transport.execute(req).await.unwrap();
        assert_eq!(resp.status, 202);
        assert_eq!(resp.body, br#"{"id":"dp_1"}"#);
        assert_eq!(
            resp.headers.get("content-type").unwrap(),
            "application/json"
        );
        mock.assert_async().await;
    }
}
