use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{any, body_json, body_string, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zoomkit_client::transport::{HttpTransport, RequestParts, ResponseParts};
use zoomkit_client::{
    ApiClient, CallError, Credentials, Method, RawOutcome, RequestSpec, StatusPolicy,
    TransportError,
};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(Credentials::new("key", "secret"), server.uri())
}

#[tokio::test]
async fn get_carries_bearer_and_json_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me/meetings"))
        .and(wiremock::matchers::header_regex("authorization", r"^Bearer [A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meetings": []})))
        .expect(1)
        .mount(&server)
        .await;

    let spec = RequestSpec::new(Method::Get, "/users/{userId}/meetings").path_param("userId", "me");
    let value = client(&server).call(spec, &StatusPolicy::broad()).await.unwrap();
    assert_eq!(value, json!({"meetings": []}));
}

#[tokio::test]
async fn delete_encodes_path_segment_sends_no_body_and_yields_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/meetings/abc%2Fdef"))
        .and(body_string(String::new()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let spec = RequestSpec::new(Method::Delete, "/meetings/{id}")
        .path_param("id", "abc/def")
        // A DELETE body is dropped before the wire no matter what the
        // caller stuffed into the spec.
        .body(zoomkit_client::Body::Raw(r#"{"ignored":true}"#.to_string()));
    let value = client(&server).call(spec, &StatusPolicy::broad()).await.unwrap();
    assert_eq!(value, json!({"status": 204, "message": "Action successful."}));
}

#[tokio::test]
async fn missing_path_params_reject_before_any_network_io() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let api = client(&server);
    let spec = RequestSpec::new(Method::Get, "/rooms/{roomId}/devices/{deviceId}/app_version");
    let outcome = api.execute(&spec).await;
    match &outcome {
        RawOutcome::Rejected(missing) => assert_eq!(missing.len(), 2),
        other => panic!("expected rejection, got {other:?}"),
    }

    let err = StatusPolicy::broad().normalize(&outcome).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Errors: Required path parameter was not specified: roomId\n\
         Required path parameter was not specified: deviceId"
    );
}

#[tokio::test]
async fn empty_query_values_never_reach_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/metrics/meetings"))
        .and(query_param("a", "1"))
        .and(query_param_is_missing("b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let spec = RequestSpec::new(Method::Get, "/metrics/meetings")
        .query("a", "1")
        .query("b", "")
        .query_opt("c", None::<String>);
    let outcome = client(&server).execute(&spec).await;
    assert!(matches!(outcome, RawOutcome::Completed { status: 200, .. }));
}

#[tokio::test]
async fn post_attaches_serialized_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/h323/devices"))
        .and(body_json(json!({"name": "lobby", "protocol": "SIP"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "d1"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut fields = serde_json::Map::new();
    fields.insert("name".to_string(), json!("lobby"));
    fields.insert("protocol".to_string(), json!("SIP"));
    let spec = RequestSpec::new(Method::Post, "/h323/devices").json_body(fields);
    let value = client(&server).call(spec, &StatusPolicy::broad()).await.unwrap();
    assert_eq!(value, json!({"id": "d1"}));
}

#[tokio::test]
async fn vendor_error_carries_message_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/meetings/91"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .mount(&server)
        .await;

    let spec = RequestSpec::new(Method::Get, "/meetings/{id}").path_param("id", "91");
    let err = client(&server).call(spec, &StatusPolicy::broad()).await.unwrap_err();
    assert_eq!(err.to_string(), "Not found (Status Code 404)");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unparseable_body_counts_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/report/daily"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let spec = RequestSpec::new(Method::Get, "/report/daily");
    let outcome = client(&server).execute(&spec).await;
    assert_eq!(outcome, RawOutcome::Completed { status: 200, body: None });
}

#[tokio::test]
async fn slow_responses_time_out_as_transport_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let api = client(&server).with_timeout(Duration::from_millis(50));
    let spec = RequestSpec::new(Method::Get, "/contacts");
    let outcome = api.execute(&spec).await;
    assert!(matches!(outcome, RawOutcome::Transport(TransportError::Timeout)));

    let err = StatusPolicy::broad().normalize(&outcome).unwrap_err();
    assert!(matches!(err, CallError::Transport(TransportError::Timeout)));
}

#[tokio::test]
async fn unreachable_host_surfaces_as_network_error() {
    // Nothing listens on the discard port.
    let api = ApiClient::with_base_url(Credentials::new("key", "secret"), "http://127.0.0.1:9")
        .with_timeout(Duration::from_secs(2));
    let spec = RequestSpec::new(Method::Get, "/contacts");
    match api.execute(&spec).await {
        RawOutcome::Transport(TransportError::Network(_) | TransportError::Timeout) => {}
        other => panic!("expected a transport failure, got {other:?}"),
    }
}

struct CountingTransport {
    sends: AtomicUsize,
}

#[async_trait]
impl HttpTransport for CountingTransport {
    async fn send(
        &self,
        _req: RequestParts,
        _timeout: Duration,
    ) -> Result<ResponseParts, TransportError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        Ok(ResponseParts { status: 200, body: b"{}".to_vec() })
    }
}

#[tokio::test]
async fn rejected_specs_never_touch_the_transport() {
    let transport = Arc::new(CountingTransport { sends: AtomicUsize::new(0) });
    let api = ApiClient::new(Credentials::new("key", "secret"))
        .with_transport(transport.clone());

    let spec = RequestSpec::new(Method::Get, "/meetings/{meetingId}");
    let outcome = api.execute(&spec).await;
    assert!(matches!(outcome, RawOutcome::Rejected(_)));
    assert_eq!(transport.sends.load(Ordering::SeqCst), 0);
}
