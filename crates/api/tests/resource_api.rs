//! HTTP-level integration tests for the resource and allocation endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

async fn create_projector(pool: &PgPool) -> String {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/resources/create-resource",
        json!({"resource_name": "Projector", "description": "HD projector", "cost_per_unit": 15.5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["resource_id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Resource CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_resource_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/resources/create-resource",
        json!({"resource_name": "Projector", "description": "HD projector", "cost_per_unit": 15.5}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["resource_name"], "Projector");
    assert_eq!(json["data"]["cost_per_unit"], 15.5);
    assert!(Uuid::parse_str(json["data"]["resource_id"].as_str().unwrap()).is_ok());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_resource_with_missing_fields_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/resources/create-resource",
        json!({"resource_name": "A"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let errors = json["errors"].as_object().unwrap();
    assert!(errors.contains_key("description"));
    assert!(errors.contains_key("cost_per_unit"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_resource_with_mistyped_cost_reports_the_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/resources/create-resource",
        json!({"resource_name": "Projector", "description": "HD", "cost_per_unit": "cheap"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let errors = json["errors"].as_object().unwrap();
    assert!(errors["cost_per_unit"][0]
        .as_str()
        .unwrap()
        .contains("expected f64"));
    assert!(!errors.contains_key("_general"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_resource_by_id(pool: PgPool) {
    let id = create_projector(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/resources/find-one/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["resource_name"], "Projector");
    assert_eq!(json["data"]["description"], "HD projector");
    assert_eq!(json["data"]["event_resources"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_resource_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/resources/find-one/{}", Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_uuid_path_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/resources/find-one/42").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_resource_merges_fields(pool: PgPool) {
    let id = create_projector(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/resources/update-resource/{id}"),
        json!({"cost_per_unit": 20.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["cost_per_unit"], 20.0);
    assert_eq!(json["data"]["resource_name"], "Projector");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_invalid_value_returns_400(pool: PgPool) {
    let id = create_projector(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/resources/update-resource/{id}"),
        json!({"cost_per_unit": 0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_resource_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/resources/update-resource/{}", Uuid::new_v4()),
        json!({"resource_name": "Screen"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_twice_returns_200_then_404(pool: PgPool) {
    let id = create_projector(&pool).await;
    let uri = format!("/resources/delete-resource/{id}");

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Resource deleted successfully");

    let app = common::build_test_app(pool);
    let response = delete(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Event resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_allocation_appears_on_resource_listing(pool: PgPool) {
    let resource_id = create_projector(&pool).await;
    let event_id = Uuid::new_v4();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/event-resources/create-event-resource",
        json!({"event_id": event_id, "resource_id": resource_id, "quantity": 2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/resources/find-all").await).await;
    let resources = json["data"].as_array().unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0]["event_resources"][0]["quantity"], 2);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/event-resources/by-event/{event_id}")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_zero_quantity_returns_400(pool: PgPool) {
    let resource_id = create_projector(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/event-resources/create-event-resource",
        json!({"event_id": Uuid::new_v4(), "resource_id": resource_id, "quantity": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["quantity"][0], "quantity must be at least 1");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_allocation_of_unknown_resource_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/event-resources/create-event-resource",
        json!({"event_id": Uuid::new_v4(), "resource_id": Uuid::new_v4(), "quantity": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}
