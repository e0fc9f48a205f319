use std::collections::BTreeMap;

use serde_json::{json, Map};
use zoomkit_core::request::{path, query};
use zoomkit_core::{Body, Method, RequestSpec};

fn params(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn substitute_replaces_all_placeholders() {
    let (path, missing) = path::substitute(
        "/meetings/{meetingId}/registrants/{registrantId}",
        &params(&[("meetingId", "123"), ("registrantId", "abc")]),
    );
    assert!(missing.is_empty());
    assert_eq!(path, "/meetings/123/registrants/abc");
    assert!(!path.contains('{') && !path.contains('}'));
}

#[test]
fn substitute_percent_encodes_values() {
    let (path, missing) =
        path::substitute("/past_meetings/{meetingUUID}/archive_files", &params(&[("meetingUUID", "abc/def==")]));
    assert!(missing.is_empty());
    assert_eq!(path, "/past_meetings/abc%2Fdef%3D%3D/archive_files");
}

#[test]
fn substitute_collects_every_missing_parameter() {
    let (path, missing) = path::substitute(
        "/rooms/{roomId}/devices/{deviceId}/app_version",
        &params(&[]),
    );
    assert_eq!(missing.len(), 2);
    assert_eq!(missing[0].0, "roomId");
    assert_eq!(missing[1].0, "deviceId");
    // Substitution keeps going past the first failure.
    assert_eq!(path, "/rooms//devices//app_version");
}

#[test]
fn substitute_reports_only_the_missing_names() {
    let (_, missing) = path::substitute(
        "/metrics/meetings/{meetingId}/participants/{participantId}/qos",
        &params(&[("meetingId", "77")]),
    );
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].0, "participantId");
    assert_eq!(
        missing[0].to_string(),
        "Required path parameter was not specified: participantId"
    );
}

#[test]
fn query_omits_empty_values() {
    let pairs = vec![
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), String::new()),
    ];
    assert_eq!(query::encode(&pairs).as_deref(), Some("a=1"));
}

#[test]
fn query_of_nothing_but_empties_is_none() {
    let pairs = vec![
        ("from".to_string(), String::new()),
        ("to".to_string(), String::new()),
    ];
    assert_eq!(query::encode(&pairs), None);
}

#[test]
fn query_percent_encodes_values() {
    let pairs = vec![("next_page_token".to_string(), "a b+c".to_string())];
    assert_eq!(
        query::encode(&pairs).as_deref(),
        Some("next_page_token=a%20b%2Bc")
    );
}

#[test]
fn query_opt_absent_values_never_land_in_the_spec() {
    let spec = RequestSpec::new(Method::Get, "/contacts")
        .query("search_key", "jane")
        .query_opt("next_page_token", None::<String>);
    assert_eq!(spec.query.len(), 1);
}

#[test]
fn empty_json_body_is_no_body() {
    assert_eq!(Body::Json(Map::new()).encoded(), None);
    assert!(Body::Json(Map::new()).is_empty());
    assert_eq!(Body::Empty.encoded(), None);
    assert_eq!(Body::Raw(String::new()).encoded(), None);
}

#[test]
fn json_body_serializes_fields() {
    let mut fields = Map::new();
    fields.insert("action".to_string(), json!("end"));
    let body = Body::Json(fields);
    assert!(!body.is_empty());
    assert_eq!(body.encoded().as_deref(), Some(r#"{"action":"end"}"#));
}

#[test]
fn raw_body_passes_through() {
    let body = Body::Raw(r#"{"pre":"encoded"}"#.to_string());
    assert_eq!(body.encoded().as_deref(), Some(r#"{"pre":"encoded"}"#));
}

#[test]
fn delete_and_get_never_allow_a_body() {
    assert!(!Method::Get.allows_body());
    assert!(!Method::Delete.allows_body());
    assert!(Method::Post.allows_body());
    assert!(Method::Put.allows_body());
    assert!(Method::Patch.allows_body());
}
