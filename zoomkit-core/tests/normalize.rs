use serde_json::json;
use zoomkit_core::error::MissingPathParam;
use zoomkit_core::{CallError, RawOutcome, StatusPolicy, TransportError};

#[test]
fn broad_returns_body_unchanged_on_200() {
    let body = json!({"id": 123, "topic": "standup"});
    let outcome = RawOutcome::completed(200, Some(body.clone()));
    assert_eq!(StatusPolicy::broad().normalize(&outcome).unwrap(), body);
}

#[test]
fn broad_synthesizes_sentinel_for_empty_204() {
    let outcome = RawOutcome::completed(204, None);
    let value = StatusPolicy::broad().normalize(&outcome).unwrap();
    assert_eq!(value, json!({"status": 204, "message": "Action successful."}));
}

#[test]
fn broad_synthesizes_sentinel_for_empty_202() {
    let outcome = RawOutcome::completed(202, None);
    let value = StatusPolicy::broad().normalize(&outcome).unwrap();
    assert_eq!(value, json!({"status": 204, "message": "Action successful."}));
}

#[test]
fn broad_treats_empty_object_body_as_empty() {
    let outcome = RawOutcome::completed(204, Some(json!({})));
    let value = StatusPolicy::broad().normalize(&outcome).unwrap();
    assert_eq!(value, json!({"status": 204, "message": "Action successful."}));
}

#[test]
fn broad_keeps_non_empty_204_body() {
    let body = json!({"deleted": true});
    let outcome = RawOutcome::completed(204, Some(body.clone()));
    assert_eq!(StatusPolicy::broad().normalize(&outcome).unwrap(), body);
}

#[test]
fn broad_formats_vendor_failure() {
    let outcome = RawOutcome::completed(404, Some(json!({"message": "Not found"})));
    let err = StatusPolicy::broad().normalize(&outcome).unwrap_err();
    assert_eq!(err.to_string(), "Not found (Status Code 404)");
    assert_eq!(err.status(), Some(404));
}

#[test]
fn missing_vendor_message_formats_as_empty() {
    let outcome = RawOutcome::completed(500, None);
    let err = StatusPolicy::broad().normalize(&outcome).unwrap_err();
    assert_eq!(err.to_string(), " (Status Code 500)");
}

#[test]
fn ok_only_rejects_201_even_though_transport_succeeded() {
    let outcome = RawOutcome::completed(201, Some(json!({"message": "Created"})));
    let err = StatusPolicy::ok_only().normalize(&outcome).unwrap_err();
    assert_eq!(err.to_string(), "Created (Status Code 201)");
}

#[test]
fn ok_only_passes_200_body_through() {
    let body = json!({"contacts": []});
    let outcome = RawOutcome::completed(200, Some(body.clone()));
    assert_eq!(StatusPolicy::ok_only().normalize(&outcome).unwrap(), body);
}

#[test]
fn rejected_outcome_lists_every_collected_error() {
    let outcome = RawOutcome::Rejected(vec![
        MissingPathParam("roomId".to_string()),
        MissingPathParam("deviceId".to_string()),
    ]);
    let err = StatusPolicy::broad().normalize(&outcome).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Errors: Required path parameter was not specified: roomId\n\
         Required path parameter was not specified: deviceId"
    );
    assert_eq!(err.status(), None);
}

#[test]
fn transport_failure_carries_no_status() {
    let outcome = RawOutcome::Transport(TransportError::Timeout);
    let err = StatusPolicy::broad().normalize(&outcome).unwrap_err();
    assert!(matches!(err, CallError::Transport(TransportError::Timeout)));
    assert_eq!(err.to_string(), "transport error: timeout");
    assert_eq!(err.status(), None);
}

#[test]
fn normalize_is_idempotent() {
    let policy = StatusPolicy::broad();
    for outcome in [
        RawOutcome::completed(200, Some(json!({"k": "v"}))),
        RawOutcome::completed(204, None),
        RawOutcome::completed(429, Some(json!({"message": "Too many requests"}))),
        RawOutcome::Rejected(vec![MissingPathParam("userId".to_string())]),
        RawOutcome::Transport(TransportError::Network("refused".to_string())),
    ] {
        assert_eq!(policy.normalize(&outcome), policy.normalize(&outcome));
    }
}
