//! Custom transports observe the fully built request and can answer it
//! without any network I/O.

use async_trait::async_trait;
use chargehound::prelude::*;
use chargehound::{HttpTransportRequest, HttpTransportResponse};
use reqwest::Method;
use reqwest::header::HeaderMap;
use std::sync::{Arc, Mutex};

struct Canned {
    status: u16,
    body: &'static str,
    seen: Mutex<Vec<HttpTransportRequest>>,
}

impl Canned {
    fn new(status: u16, body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn last(&self) -> HttpTransportRequest {
        self.seen.lock().unwrap().last().cloned().expect("a request")
    }

    fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for Canned {
    async fn execute(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, ChargehoundError> {
        self.seen.lock().unwrap().push(request);
        Ok(HttpTransportResponse {
            status: self.status,
            headers: HeaderMap::new(),
            body: self.body.as_bytes().to_vec(),
        })
    }
}

#[tokio::test]
async fn per_call_transport_sees_final_request() {
    let transport = Canned::new(200, r#"{"id":"dp_xxx","state":"submitted"}"#);
    let client = Chargehound::new("api_key").unwrap();
    let options = CallOptions::new().with_transport(transport.clone());

    let update = DisputeUpdate::new().queue(true);
    let dispute = client
        .disputes()
        .submit("dp_xxx", &update, Some(&options))
        .await
        .unwrap();

    assert_eq!(dispute.state.as_deref(), Some("submitted"));
    let request = transport.last();
    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.url,
        "https://api.chargehound.com/v1/disputes/dp_xxx/submit"
    );
    assert_eq!(request.body.as_deref(), Some(&br#"{"queue":true}"#[..]));
    assert_eq!(
        request.headers.get("authorization").unwrap(),
        "Basic YXBpX2tleTo="
    );
    assert_eq!(request.ctx.url, request.url);
}

#[tokio::test]
async fn client_transport_is_used_without_options() {
    let transport = Canned::new(200, r#"{"data":[],"has_more":false}"#);
    let client = Chargehound::builder()
        .api_key("api_key")
        .with_transport(transport.clone())
        .build()
        .unwrap();

    let params = ListDisputesParams::new().state("needs_response").limit(0);
    client.disputes().list(&params, None).await.unwrap();

    assert_eq!(
        transport.last().url,
        "https://api.chargehound.com/v1/disputes?state=needs_response"
    );
}

#[tokio::test]
async fn override_does_not_replace_default() {
    let default = Canned::new(200, r#"{"id":"dp_default"}"#);
    let custom = Canned::new(200, r#"{"id":"dp_custom"}"#);
    let client = Chargehound::builder()
        .api_key("api_key")
        .with_transport(default.clone())
        .build()
        .unwrap();
    let options = CallOptions::new().with_transport(custom.clone());

    let first = client
        .disputes()
        .retrieve("dp_xxx", Some(&options))
        .await
        .unwrap();
    let second = client.disputes().retrieve("dp_xxx", None).await.unwrap();

    assert_eq!(first.id, "dp_custom");
    assert_eq!(second.id, "dp_default");
    assert_eq!(custom.count(), 1);
    assert_eq!(default.count(), 1);
}

#[tokio::test]
async fn synthetic_error_response_is_classified() {
    let transport = Canned::new(
        400,
        r#"{"error":{"status":400,"message":"Missing fields: customer_name"}}"#,
    );
    let client = Chargehound::builder()
        .api_key("api_key")
        .with_transport(transport.clone())
        .build()
        .unwrap();

    let err = client
        .disputes()
        .submit("dp_xxx", &DisputeUpdate::new(), None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::BadRequest));
    assert_eq!(err.to_string(), "Bad Request: Missing fields: customer_name");
    assert_eq!(transport.count(), 1);
}

#[tokio::test]
async fn ids_are_escaped_in_path() {
    let transport = Canned::new(200, r#"{"id":"a/b"}"#);
    let client = Chargehound::new("api_key").unwrap();
    let options = CallOptions::new().with_transport(transport.clone());

    client
        .disputes()
        .accept("a/b", Some(&options))
        .await
        .unwrap();

    assert_eq!(
        transport.last().url,
        "https://api.chargehound.com/v1/disputes/a%2Fb/accept"
    );
    assert!(transport.last().body.is_none());
}

#[tokio::test]
async fn dot_and_empty_ids_never_reach_transport() {
    let transport = Canned::new(200, r#"{"id":"dp_xxx"}"#);
    let client = Chargehound::builder()
        .api_key("api_key")
        .with_transport(transport.clone())
        .build()
        .unwrap();

    for id in ["", ".", ".."] {
        let err = client.disputes().accept(id, None).await.unwrap_err();
        assert!(matches!(err, ChargehoundError::Configuration(_)), "id {id:?}");
        let err = client.disputes().retrieve(id, None).await.unwrap_err();
        assert!(matches!(err, ChargehoundError::Configuration(_)), "id {id:?}");
    }
    assert_eq!(transport.count(), 0);
}

#[tokio::test]
async fn null_and_list_evidence_values_decode() {
    let transport = Canned::new(
        200,
        r#"{"id":"dp_1","fields":{"customer_name":"x","shipping_date":null,"items":["a","b"]}}"#,
    );
    let client = Chargehound::builder()
        .api_key("api_key")
        .with_transport(transport)
        .build()
        .unwrap();

    let dispute = client.disputes().retrieve("dp_1", None).await.unwrap();

    assert!(dispute.fields["shipping_date"].is_null());
    assert_eq!(
        dispute.fields["items"],
        FieldValue::Json(serde_json::json!(["a", "b"]))
    );
}
