#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use mcm_api::config::ServerConfig;
use mcm_api::router::build_app_router;
use mcm_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        default_owner_user_id: 1,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a campaign through the API and return its id.
pub async fn create_campaign(pool: &PgPool, name: &str, start_date: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/campaigns",
        serde_json::json!({
            "name": name,
            "budget": "2500.00",
            "start_date": start_date,
            "end_date": "2025-12-31",
            "description": "Created by test",
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["campaign_id"].as_i64().unwrap()
}

/// Create a channel under a campaign and return its id.
pub async fn create_channel(pool: &PgPool, campaign_id: i64, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/campaigns/{campaign_id}/channels"),
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["channel_id"].as_i64().unwrap()
}

/// Record a performance metric against a channel.
pub async fn record_metric(pool: &PgPool, channel_id: i64, metric_name: &str, metric_value: f64) {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/channels/{channel_id}/performance"),
        serde_json::json!({ "metric_name": metric_name, "metric_value": metric_value }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
}
