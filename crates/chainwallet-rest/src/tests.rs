//! Tests for the composer, decoder, and REST client.

use chainwallet_sign::SignedPayload;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::RestClient;
use crate::error::RestError;
use crate::request::{Request, RequestBody};
use crate::response::RawResponse;
use crate::types::{set_callback_url, InvokeMode, RequestEnvelope, RestConfig};

#[derive(Debug, Deserialize, PartialEq)]
struct Ticket {
    id: String,
    amount: i64,
}

fn test_config(base_url: &str) -> RestConfig {
    RestConfig {
        base_url: base_url.to_string(),
        api_key: Some("test-key".to_string()),
        timeout: None,
    }
}

fn signature() -> SignedPayload {
    SignedPayload {
        creator: "did:axn:alice".to_string(),
        nonce: "nonce".to_string(),
        signature_value: "c2ln".to_string(),
        algorithm: "ed25519".to_string(),
    }
}

fn ok_envelope(payload: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "err_code": 0, "err_message": "", "payload": payload })
}

fn raw(status: u16, body: serde_json::Value) -> RawResponse {
    RawResponse::new(
        StatusCode::from_u16(status).unwrap(),
        serde_json::to_vec(&body).unwrap(),
    )
}

// --- decoder ---

#[test]
fn test_decode_nested_payload() {
    let resp = raw(200, ok_envelope(serde_json::json!(r#"{"id":"t1","amount":5}"#)));
    let ticket: Ticket = resp.decode().unwrap();
    assert_eq!(ticket, Ticket { id: "t1".into(), amount: 5 });
}

#[test]
fn test_decode_non_ok_status() {
    let resp = RawResponse::new(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
    let err = resp.decode::<Ticket>().unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(
        err,
        RestError::UnexpectedStatus { status_code: 502, ref message } if message.contains("Bad Gateway")
    ));
}

#[test]
fn test_decode_non_ok_status_with_valid_envelope() {
    // Status is checked before the envelope is even parsed.
    let resp = raw(500, ok_envelope(serde_json::json!(r#"{"id":"t1","amount":5}"#)));
    assert!(matches!(
        resp.decode::<Ticket>(),
        Err(RestError::UnexpectedStatus { status_code: 500, .. })
    ));
}

#[test]
fn test_decode_malformed_envelope() {
    let resp = RawResponse::new(StatusCode::OK, "{not valid json");
    assert!(matches!(resp.decode::<Ticket>(), Err(RestError::Decode(_))));

    let empty = RawResponse::new(StatusCode::OK, "");
    assert!(matches!(empty.decode::<Ticket>(), Err(RestError::Decode(_))));
}

#[test]
fn test_decode_remote_error_ignores_payload() {
    let resp = raw(
        200,
        serde_json::json!({
            "err_code": 8000,
            "err_message": "insufficient balance",
            "payload": r#"{"id":"t1","amount":5}"#
        }),
    );
    let err = resp.decode::<Ticket>().unwrap_err();
    assert_eq!(err.remote_code(), Some(8000));
    assert!(matches!(
        err,
        RestError::Remote { code: 8000, ref message } if message == "insufficient balance"
    ));
}

#[test]
fn test_decode_payload_type_invalid() {
    let cases = [
        (serde_json::json!({"id": "t1", "amount": 5}), "object"),
        (serde_json::json!([1, 2]), "array"),
        (serde_json::json!(42), "number"),
        (serde_json::json!(true), "bool"),
        (serde_json::Value::Null, "null"),
    ];
    for (payload, expected) in cases {
        let resp = raw(200, ok_envelope(payload));
        match resp.decode::<Ticket>() {
            Err(RestError::PayloadType(name)) => assert_eq!(name, expected),
            other => panic!("expected PayloadType({expected}), got {other:?}"),
        }
    }
}

#[test]
fn test_decode_missing_payload_on_success() {
    let resp = raw(200, serde_json::json!({ "err_code": 0 }));
    assert!(matches!(
        resp.decode::<Ticket>(),
        Err(RestError::PayloadType(ref name)) if name == "null"
    ));
}

#[test]
fn test_decode_malformed_nested_payload() {
    let resp = raw(200, ok_envelope(serde_json::json!("{broken")));
    assert!(matches!(resp.decode::<Ticket>(), Err(RestError::Decode(_))));

    let wrong_shape = raw(200, ok_envelope(serde_json::json!(r#"{"id":7}"#)));
    assert!(matches!(wrong_shape.decode::<Ticket>(), Err(RestError::Decode(_))));
}

#[test]
fn test_decode_accepts_capitalized_envelope_fields() {
    let resp = raw(
        200,
        serde_json::json!({ "ErrCode": 0, "ErrMessage": "", "Payload": r#"{"id":"t2","amount":1}"# }),
    );
    let ticket: Ticket = resp.decode().unwrap();
    assert_eq!(ticket.id, "t2");
}

#[test]
fn test_decode_is_idempotent() {
    let ok = raw(200, ok_envelope(serde_json::json!(r#"{"id":"t1","amount":5}"#)));
    assert_eq!(ok.decode::<Ticket>().unwrap(), ok.decode::<Ticket>().unwrap());

    let rejected = raw(200, serde_json::json!({ "err_code": 3, "err_message": "nope" }));
    let first = rejected.decode::<Ticket>().unwrap_err().to_string();
    let second = rejected.decode::<Ticket>().unwrap_err().to_string();
    assert_eq!(first, second);
}

// --- composer ---

#[test]
fn test_compose_rejects_missing_path() {
    let headers = HeaderMap::new();
    assert!(matches!(
        Request::compose(Method::GET, "", &headers, RequestBody::Empty),
        Err(RestError::Precondition(_))
    ));
    assert!(matches!(
        Request::compose(Method::GET, "v1/poe", &headers, RequestBody::Empty),
        Err(RestError::Precondition(_))
    ));
}

#[test]
fn test_compose_envelope_body_carries_exact_payload() {
    let payload = r#"{"owner":"did:axn:alice","amount":10}"#.to_string();
    let envelope = RequestEnvelope::new(payload.clone(), signature());
    let request = Request::compose(
        Method::POST,
        "/v1/transaction/tokens/issue",
        &HeaderMap::new(),
        RequestBody::Envelope(envelope),
    )
    .unwrap();

    let http = request
        .into_http(&reqwest::Client::new(), "http://wallet.test/", &HeaderMap::new())
        .unwrap();

    assert_eq!(http.method(), Method::POST);
    assert_eq!(http.url().as_str(), "http://wallet.test/v1/transaction/tokens/issue");
    assert_eq!(http.headers()["content-type"], "application/json");

    let body = http.body().and_then(|b| b.as_bytes()).unwrap();
    let sent: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(sent["payload"].as_str().unwrap(), payload);
    assert_eq!(sent["signature"]["creator"], "did:axn:alice");
}

#[test]
fn test_compose_passes_headers_through() {
    let mut headers = HeaderMap::new();
    InvokeMode::Sync.apply(&mut headers);
    set_callback_url(&mut headers, "https://caller.example.com/events").unwrap();

    let mut defaults = HeaderMap::new();
    defaults.insert("api-key", HeaderValue::from_static("k"));

    let http = Request::compose(Method::GET, "/v1/poe", &headers, RequestBody::Empty)
        .unwrap()
        .with_query("id", "did:axn:poe 1")
        .into_http(&reqwest::Client::new(), "http://wallet.test", &defaults)
        .unwrap();

    assert_eq!(http.headers()["bc-invoke-mode"], "sync");
    assert_eq!(http.headers()["callback-url"], "https://caller.example.com/events");
    assert_eq!(http.headers()["api-key"], "k");
    assert_eq!(http.url().query(), Some("id=did%3Aaxn%3Apoe+1"));
}

#[test]
fn test_body_content_type_replaces_caller_content_type() {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

    let form = reqwest::multipart::Form::new().text("poe_id", "did:axn:poe-1");
    let http = Request::compose(
        Method::POST,
        "/v1/poe/upload",
        &headers,
        RequestBody::Multipart(form),
    )
    .unwrap()
    .into_http(&reqwest::Client::new(), "http://wallet.test", &HeaderMap::new())
    .unwrap();

    let values: Vec<_> = http.headers().get_all(CONTENT_TYPE).iter().collect();
    assert_eq!(values.len(), 1);
    assert!(values[0]
        .to_str()
        .unwrap()
        .starts_with("multipart/form-data; boundary="));

    let envelope = RequestEnvelope::new("{}".to_string(), signature());
    let http = Request::compose(
        Method::POST,
        "/v1/poe/create",
        &headers,
        RequestBody::Envelope(envelope),
    )
    .unwrap()
    .into_http(&reqwest::Client::new(), "http://wallet.test", &HeaderMap::new())
    .unwrap();

    let values: Vec<_> = http.headers().get_all(CONTENT_TYPE).iter().collect();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0], "application/json");
}

#[test]
fn test_invoke_mode_headers() {
    let mut headers = HeaderMap::new();
    assert_eq!(InvokeMode::from_headers(&headers), InvokeMode::Async);

    InvokeMode::Sync.apply(&mut headers);
    assert_eq!(InvokeMode::from_headers(&headers), InvokeMode::Sync);

    InvokeMode::Async.apply(&mut headers);
    assert!(headers.get("bc-invoke-mode").is_none());
    assert_eq!(InvokeMode::default(), InvokeMode::Async);
}

#[test]
fn test_invalid_callback_url_header() {
    let mut headers = HeaderMap::new();
    let err = set_callback_url(&mut headers, "https://bad\nurl").unwrap_err();
    assert!(matches!(err, RestError::InvalidHeader(_)));
}

#[test]
fn test_config_defaults() {
    let config = RestConfig::default();
    assert_eq!(config.base_url, "http://127.0.0.1:9143");
    assert!(config.api_key.is_none());
    assert!(config.timeout.is_none());
}

// --- client ---

#[tokio::test]
async fn test_call_round_trip() {
    let server = MockServer::start().await;
    let envelope = RequestEnvelope::new(r#"{"id":"t1"}"#.to_string(), signature());

    Mock::given(method("POST"))
        .and(path("/v1/transaction/tokens/issue"))
        .and(header("api-key", "test-key"))
        .and(body_json(serde_json::json!({
            "payload": r#"{"id":"t1"}"#,
            "signature": {
                "creator": "did:axn:alice",
                "nonce": "nonce",
                "signature_value": "c2ln",
                "algorithm": "ed25519"
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(serde_json::json!(r#"{"id":"t1","amount":3}"#))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(test_config(&server.uri())).unwrap();
    let request = Request::compose(
        Method::POST,
        "/v1/transaction/tokens/issue",
        &HeaderMap::new(),
        RequestBody::Envelope(envelope),
    )
    .unwrap();

    let ticket: Ticket = client.call(request).await.unwrap();
    assert_eq!(ticket, Ticket { id: "t1".into(), amount: 3 });
}

#[tokio::test]
async fn test_sync_and_async_decode_identically() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/poe"))
        .and(query_param("id", "p1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(serde_json::json!(r#"{"id":"p1","amount":0}"#))),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = RestClient::new(test_config(&server.uri())).unwrap();

    let mut sync_headers = HeaderMap::new();
    InvokeMode::Sync.apply(&mut sync_headers);

    let mut results = Vec::new();
    for headers in [HeaderMap::new(), sync_headers] {
        let request = Request::compose(Method::GET, "/v1/poe", &headers, RequestBody::Empty)
            .unwrap()
            .with_query("id", "p1");
        results.push(client.call::<Ticket>(request).await.unwrap());
    }
    assert_eq!(results[0], results[1]);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("bc-invoke-mode").is_none());
    assert_eq!(requests[1].headers.get("bc-invoke-mode").unwrap(), "sync");
}

#[tokio::test]
async fn test_no_api_key_header_when_unset() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/poe"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(serde_json::json!(r#"{"id":"p1","amount":0}"#))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(RestConfig {
        base_url: server.uri(),
        ..RestConfig::default()
    })
    .unwrap();
    let request =
        Request::compose(Method::GET, "/v1/poe", &HeaderMap::new(), RequestBody::Empty).unwrap();
    client.call::<Ticket>(request).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.iter().any(|(name, _)| name == "api-key"));
}

#[tokio::test]
async fn test_remote_rejection_through_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/poe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "err_code": 5012,
            "err_message": "poe not found"
        })))
        .mount(&server)
        .await;

    let client = RestClient::new(test_config(&server.uri())).unwrap();
    let request =
        Request::compose(Method::GET, "/v1/poe", &HeaderMap::new(), RequestBody::Empty).unwrap();
    let err = client.call::<Ticket>(request).await.unwrap_err();

    assert!(!err.is_transport());
    assert!(err.to_string().contains("poe not found"));
    assert_eq!(err.remote_code(), Some(5012));
}

#[test]
fn test_invalid_api_key_rejected_at_construction() {
    let result = RestClient::new(RestConfig {
        api_key: Some("bad\nkey".to_string()),
        ..RestConfig::default()
    });
    assert!(matches!(result, Err(RestError::InvalidHeader(_))));
}

#[tokio::test]
async fn test_connection_refused() {
    let client = RestClient::new(RestConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..RestConfig::default()
    })
    .unwrap();
    let request =
        Request::compose(Method::GET, "/v1/poe", &HeaderMap::new(), RequestBody::Empty).unwrap();
    let err = client.call::<Ticket>(request).await.unwrap_err();
    assert!(matches!(err, RestError::Http(_)));
    assert!(err.is_transport());
}
