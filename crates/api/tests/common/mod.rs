#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use movierent_api::config::ServerConfig;
use movierent_api::router::build_app_router;
use movierent_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_customer(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/customer_add/",
        serde_json::json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "phone": "555-0100",
            "loyalty_points": 0,
        }),
    )
    .await;
    body_json(response).await["customerid"].as_i64().unwrap()
}

pub async fn create_movie(pool: &PgPool, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/movie_add/",
        serde_json::json!({"title": title, "category": "Noir", "availability": true}),
    )
    .await;
    body_json(response).await["movieid"].as_i64().unwrap()
}

pub fn rental_body(customerid: i64, movieid: i64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "customerid": customerid,
        "movieid": movieid,
        "rental_date": "2024-05-01",
        "due_date": "2024-05-08",
        "return_date": "2024-05-06",
        "status": status,
    })
}

pub async fn create_rental(pool: &PgPool, customerid: i64, movieid: i64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/rental_add/",
        rental_body(customerid, movieid, "rented"),
    )
    .await;
    body_json(response).await["rentalid"].as_i64().unwrap()
}

pub async fn table_count(pool: &PgPool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}
