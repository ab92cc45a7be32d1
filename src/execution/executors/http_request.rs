//! Request building and execution
//!
//! `build_request` assembles the outbound request (URL, auth, user agent,
//! content type, optional API version) without touching the network.
//! `execute_request` hands it to the selected transport exactly once and
//! classifies the response. Nothing here retries.

use crate::config::ClientConfig;
use crate::error::ChargehoundError;
use crate::execution::executors::errors as exec_errors;
use crate::execution::http::headers::HttpHeaderBuilder;
use crate::execution::http::interceptor::HttpRequestContext;
use crate::execution::http::transport::{HttpTransportRequest, select_transport};
use crate::types::{CallOptions, ResourceResult};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

/// Build the outbound request for `path` (relative to the configured base path).
///
/// The query string is appended only when `query` is non-empty.
pub fn build_request(
    config: &ClientConfig,
    method: Method,
    path: &str,
    body: Option<Vec<u8>>,
    query: &[(&str, String)],
) -> Result<HttpTransportRequest, ChargehoundError> {
    let raw = format!("{}{}", config.base_url(), path);
    let mut url = Url::parse(&raw)
        .map_err(|e| ChargehoundError::Configuration(format!("Invalid URL '{raw}': {e}")))?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    let mut headers = HttpHeaderBuilder::new()
        .with_basic_auth(config.api_key())?
        .with_user_agent(&config.user_agent())?
        .with_api_version(config.api_version())?;
    if body.is_some() {
        headers = headers.with_json_content_type();
    }

    let url = String::from(url);
    Ok(HttpTransportRequest {
        ctx: HttpRequestContext::new(method.clone(), url.clone()),
        method,
        url,
        headers: headers.build(),
        body,
    })
}

/// Send `request` through the selected transport and decode the response.
pub async fn execute_request<T: DeserializeOwned>(
    config: &ClientConfig,
    options: Option<&CallOptions>,
    request: HttpTransportRequest,
) -> Result<ResourceResult<T>, ChargehoundError> {
    let ctx = request.ctx.clone();
    let interceptors = config.interceptors();
    let notify_error = |e: &ChargehoundError| {
        tracing::debug!(target: "chargehound::http", request_id=%ctx.request_id, url=%ctx.url, err=%e, "request error");
        for it in interceptors {
            it.on_error(&ctx, e);
        }
    };

    for it in interceptors {
        if let Err(e) = it.on_before_send(&ctx, &request) {
            notify_error(&e);
            return Err(e);
        }
    }

    tracing::debug!(target: "chargehound::http", request_id=%ctx.request_id, method=%ctx.method, url=%ctx.url, "sending request");
    let transport = select_transport(options, config.transport());
    let response = match transport.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            notify_error(&e);
            return Err(e);
        }
    };

    tracing::debug!(target: "chargehound::http", request_id=%ctx.request_id, url=%ctx.url, status=%response.status, "response received");
    for it in interceptors {
        it.on_response(&ctx, &response);
    }

    exec_errors::classify_response(&response).inspect_err(|e| notify_error(e))
}
