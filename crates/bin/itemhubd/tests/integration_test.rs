//! End-to-end smoke tests for the full itemhubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use itemhub_adapter_http_axum::router;
use itemhub_adapter_http_axum::state::AppState;
use itemhub_adapter_storage_sqlite_sqlx::{Config, SqliteItemRepository};
use itemhub_app::services::item_service::ItemService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config::new("sqlite::memory:")
        .build()
        .await
        .expect("in-memory database should initialise");

    let item_repo = SqliteItemRepository::new(db.pool().clone());

    router::build(AppState::new(ItemService::new(item_repo)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json(resp: Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check & docs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_serve_openapi_document_listing_item_routes() {
    let resp = app()
        .await
        .oneshot(get("/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert!(body["paths"]["/items"].is_object());
    assert!(body["paths"]["/items/{id}"].is_object());
}

// ---------------------------------------------------------------------------
// API: item lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_widget_lifecycle() {
    let app = app().await;

    // Create
    let resp = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/items",
            r#"{"name":"Widget","price":9.99,"category":"tools"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/items/1");
    let expected = serde_json::json!({"id": 1, "name": "Widget", "price": 9.99, "category": "tools"});
    assert_eq!(json(resp).await, expected);

    // Fetch
    let resp = app.clone().oneshot(get("/items/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await, expected);

    // Delete
    let resp = app.clone().oneshot(delete("/items/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone
    let resp = app.clone().oneshot(get("/items/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Deleting again still reports absence
    let resp = app.oneshot(delete("/items/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_list_exactly_the_created_items() {
    let app = app().await;

    for name in ["hammer", "saw", "drill"] {
        let resp = app
            .clone()
            .oneshot(with_json(
                "POST",
                "/items",
                &format!(r#"{{"name":"{name}","price":1.5,"category":"tools"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app.oneshot(get("/items")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json(resp).await;
    let items = body.as_array().unwrap();
    let names: Vec<&str> = items
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    let ids: Vec<i64> = items
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    assert_eq!(names, ["hammer", "saw", "drill"]);
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn should_replace_item_and_return_no_content() {
    let app = app().await;

    app.clone()
        .oneshot(with_json(
            "POST",
            "/items",
            r#"{"name":"Widget","price":9.99,"category":"tools"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(with_json(
            "PUT",
            "/items/1",
            r#"{"id":1,"name":"Gizmo","price":12.0,"category":"gadgets"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.oneshot(get("/items/1")).await.unwrap();
    assert_eq!(
        json(resp).await,
        serde_json::json!({"id": 1, "name": "Gizmo", "price": 12.0, "category": "gadgets"})
    );
}

#[tokio::test]
async fn should_reject_mismatched_replace_and_keep_stored_row() {
    let app = app().await;

    app.clone()
        .oneshot(with_json(
            "POST",
            "/items",
            r#"{"name":"Widget","price":9.99,"category":"tools"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(with_json(
            "PUT",
            "/items/1",
            r#"{"id":2,"name":"Gizmo","price":12.0,"category":"gadgets"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.oneshot(get("/items/1")).await.unwrap();
    assert_eq!(json(resp).await["name"], "Widget");
}

#[tokio::test]
async fn should_return_not_found_when_replacing_missing_item() {
    let resp = app()
        .await
        .oneshot(with_json(
            "PUT",
            "/items/9",
            r#"{"id":9,"name":"Gizmo","price":12.0,"category":"gadgets"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_bad_request_for_malformed_body() {
    let resp = app()
        .await
        .oneshot(with_json("POST", "/items", r#"{"name":"Widget","price":"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(json(resp).await["error"].is_string());
}

#[tokio::test]
async fn should_not_reuse_deleted_ids() {
    let app = app().await;
    let body = r#"{"name":"Widget","price":9.99,"category":"tools"}"#;

    app.clone()
        .oneshot(with_json("POST", "/items", body))
        .await
        .unwrap();
    app.clone().oneshot(delete("/items/1")).await.unwrap();

    let resp = app.oneshot(with_json("POST", "/items", body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(json(resp).await["id"], 2);
}

// ---------------------------------------------------------------------------
// API: rejected requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_bad_request_when_replace_body_is_unparseable() {
    let app = app().await;
    app.clone()
        .oneshot(with_json(
            "POST",
            "/items",
            r#"{"name":"Widget","price":9.99,"category":"tools"}"#,
        ))
        .await
        .unwrap();

    for body in ["", "not json", r#"{"id":1,"name":"Widget"}"#] {
        let resp = app
            .clone()
            .oneshot(with_json("PUT", "/items/1", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body:?}");
    }

    let resp = app.oneshot(get("/items/1")).await.unwrap();
    assert_eq!(json(resp).await["price"], 9.99);
}

#[tokio::test]
async fn should_return_bad_request_for_non_integer_path_ids() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(with_json(
            "PUT",
            "/items/abc",
            r#"{"name":"Widget","price":9.99,"category":"tools"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.clone().oneshot(delete("/items/abc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .oneshot(get("/items/99999999999999999999"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_report_mismatch_before_missing_item_on_empty_store() {
    let resp = app()
        .await
        .oneshot(with_json(
            "PUT",
            "/items/9",
            r#"{"id":10,"name":"Widget","price":9.99,"category":"tools"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_return_internal_error_when_database_is_unavailable() {
    let db = Config::new("sqlite::memory:")
        .build()
        .await
        .expect("in-memory database should initialise");
    let pool = db.pool().clone();
    let app = router::build(AppState::new(ItemService::new(SqliteItemRepository::new(
        pool.clone(),
    ))));

    pool.close().await;

    let resp = app.clone().oneshot(get("/items")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json(resp).await,
        serde_json::json!({ "error": "internal server error" })
    );

    let resp = app
        .oneshot(with_json(
            "POST",
            "/items",
            r#"{"name":"Widget","price":9.99,"category":"tools"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
