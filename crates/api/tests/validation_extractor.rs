//! Tests for the `ValidatedJson` extractor.
//!
//! Mounts the extractor on a bare router so no database is needed.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use eventdesk_api::extract::ValidatedJson;
use eventdesk_core::resource::NewResource;
use eventdesk_core::venue::NewVenueSlot;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn echo_resource(ValidatedJson(input): ValidatedJson<NewResource>) -> Json<NewResource> {
    Json(input)
}

async fn accept_slot(ValidatedJson(_input): ValidatedJson<NewVenueSlot>) -> StatusCode {
    StatusCode::NO_CONTENT
}

fn app() -> Router {
    Router::new()
        .route("/resources", post(echo_resource))
        .route("/slots", post(accept_slot))
}

async fn post_raw(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn valid_body_reaches_handler() {
    let (status, json) = post_raw(
        "/resources",
        r#"{"resource_name":"Projector","description":"HD projector","cost_per_unit":15.5}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["resource_name"], "Projector");
}

#[tokio::test]
async fn missing_fields_are_listed_per_field() {
    let (status, json) = post_raw("/resources", r#"{"resource_name":"A"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let errors = json["errors"].as_object().unwrap();
    assert_eq!(
        errors["resource_name"][0],
        "resource_name must be between 3 and 100 characters"
    );
    assert_eq!(errors["description"][0], "description is required");
    assert_eq!(errors["cost_per_unit"][0], "cost_per_unit is required");
}

#[tokio::test]
async fn malformed_json_is_a_general_error() {
    let (status, json) = post_raw("/resources", r#"{"resource_name": "#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let general = json["errors"]["_general"].as_array().unwrap();
    assert_eq!(general.len(), 1);
}

#[tokio::test]
async fn wrong_field_type_is_listed_under_the_field() {
    let (status, json) = post_raw(
        "/resources",
        r#"{"resource_name":"Projector","description":"HD","cost_per_unit":"cheap"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let errors = json["errors"].as_object().unwrap();
    let message = errors["cost_per_unit"][0].as_str().unwrap();
    assert!(message.contains("invalid type"), "{message}");
    assert!(!errors.contains_key("_general"));
}

#[tokio::test]
async fn nested_type_error_is_listed_under_top_level_field() {
    let (status, json) = post_raw(
        "/slots",
        r#"{"slot_date":"2026-06-01","booked_hours":[{"start":"nine","end":12}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["errors"]["booked_hours"].is_array());
    assert!(json["errors"].get("_general").is_none());
}

#[tokio::test]
async fn missing_nested_value_is_listed_under_top_level_field() {
    let (status, json) = post_raw(
        "/slots",
        r#"{"slot_date":"2026-06-01","booked_hours":[{"start":9}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["errors"]["booked_hours"][0].as_str().unwrap();
    assert!(message.contains("missing field `end`"), "{message}");
}

#[tokio::test]
async fn non_object_body_is_a_general_error() {
    let (status, json) = post_raw("/resources", "[1, 2]").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["errors"]["_general"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_content_type_is_a_general_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/resources")
        .body(Body::from(r#"{"resource_name":"Projector"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(json["errors"]["_general"].is_array());
}

#[tokio::test]
async fn manual_rules_report_their_field() {
    let (status, json) = post_raw(
        "/slots",
        r#"{"slot_date":"2026-06-01","status":"reserved","booked_hours":[{"start":10,"end":9}]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["errors"]["status"].is_array());
    assert!(json["errors"]["booked_hours"].is_array());
    assert!(json["errors"].get("slot_date").is_none());
}
