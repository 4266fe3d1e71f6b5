//! HTTP-level integration tests for the `/api/projects` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn loft_payload() -> serde_json::Value {
    serde_json::json!({
        "title": "Loft",
        "description": "d",
        "category": "Residential",
        "type": "Apartment",
        "size": "900 sq ft",
        "location": "X",
        "pictures": [],
        "thumbnail": ""
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_returns_201_with_generated_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", loft_payload()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Loft");
    assert_eq!(json["category"], "Residential");
    assert_eq!(json["type"], "Apartment");
    assert!(json["id"].is_string());
    assert!(json["createdAt"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_get_returns_same_object(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(app, "/api/projects", loft_payload()).await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/projects/{}", uuid::Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Project not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_malformed_id_is_indistinguishable_from_missing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Project not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_rejects_unknown_category(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut payload = loft_payload();
    payload["category"] = serde_json::json!("Industrial");

    let response = post_json(app, "/api/projects", payload).await;
    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_patches_only_the_sent_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(app, "/api/projects", loft_payload()).await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/projects/{id}"),
        serde_json::json!({"title": "X"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["title"], "X");
    assert_eq!(updated["description"], created["description"]);
    assert_eq!(updated["category"], created["category"]);
    assert_eq!(updated["type"], created["type"]);
    assert_eq!(updated["size"], created["size"]);
    assert_eq!(updated["location"], created["location"]);
    assert_eq!(updated["thumbnail"], created["thumbnail"]);
    assert_eq!(updated["pictures"], created["pictures"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_project_is_a_generic_failure(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/projects/{}", uuid::Uuid::new_v4()),
        serde_json::json!({"title": "X"}),
    )
    .await;

    // 404 is reserved for single-project GET.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_confirms_then_get_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let create_resp = post_json(app, "/api/projects", loft_payload()).await;
    let created = body_json(create_resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Project deleted successfully");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_nonexistent_project_succeeds_silently(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/projects/{}", uuid::Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Project deleted successfully");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_newest_first(pool: PgPool) {
    for title in ["first", "second", "third"] {
        let mut payload = loft_payload();
        payload["title"] = serde_json::json!(title);
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/projects", payload).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let projects = json.as_array().unwrap();
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0]["title"], "third");
    assert_eq!(projects[2]["title"], "first");
}
