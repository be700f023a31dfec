//! Routes backed by placeholder integrations or declared without handlers.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use eventdesk_core::services::PLACEHOLDER_PAYMENT_STATUS;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_payment_status_is_placeholder(pool: PgPool) {
    let payment_id = Uuid::new_v4();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/payments/{payment_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["payment_id"], payment_id.to_string());
    assert_eq!(json["data"]["status"], PLACEHOLDER_PAYMENT_STATUS);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_registration_routes_return_501(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/registrations").await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/registrations/events/{}", Uuid::new_v4()),
        json!({"user_id": Uuid::new_v4()}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_IMPLEMENTED");
}
