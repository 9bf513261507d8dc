//! HTTP-level integration tests for the metrics and dashboard endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_campaign, create_channel, get, record_metric};
use sqlx::PgPool;

/// Campaign with channel A [Emails Sent 100, Open Rate 25.5] and channel B
/// [Emails Sent 50]. Returns the campaign id.
async fn seed_two_channel_campaign(pool: &PgPool) -> i64 {
    let c1 = create_campaign(pool, "C1", "2025-04-01").await;
    let a = create_channel(pool, c1, "A").await;
    let b = create_channel(pool, c1, "B").await;
    record_metric(pool, a, "Emails Sent", 100.0).await;
    record_metric(pool, a, "Open Rate", 25.5).await;
    record_metric(pool, b, "Emails Sent", 50.0).await;
    c1
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_metrics_sum_across_channels(pool: PgPool) {
    let c1 = seed_two_channel_campaign(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/campaigns/{c1}/metrics")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!({ "Emails Sent": 150.0, "Open Rate": 25.5 })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_metrics_for_campaign_without_data_is_empty(pool: PgPool) {
    let id = create_campaign(&pool, "Nothing Yet", "2025-04-01").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/campaigns/{id}/metrics")).await).await;
    assert_eq!(json["data"], serde_json::json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_metrics_for_unknown_campaign_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/campaigns/999999/metrics").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_view_headline_figures(pool: PgPool) {
    let c1 = seed_two_channel_campaign(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/campaigns/{c1}/dashboard")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let view = &json["data"];
    assert_eq!(view["campaign_id"], c1);
    assert_eq!(view["campaign_name"], "C1");
    assert_eq!(view["emails_sent"], 150.0);
    assert_eq!(view["open_rate_pct"], "25.50%");
    assert_eq!(view["click_through_rate_pct"], "0.00%");
    assert_eq!(view["has_data"], true);

    let series = view["chart"]["series"].as_array().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["metric_name"], "Emails Sent");
    assert_eq!(series[0]["total_value"], 150.0);
    assert_eq!(view["chart"]["title"], "Key Performance Metrics");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_view_without_data(pool: PgPool) {
    let id = create_campaign(&pool, "Fresh", "2025-04-01").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/campaigns/{id}/dashboard")).await).await;
    let view = &json["data"];
    assert_eq!(view["has_data"], false);
    assert_eq!(view["emails_sent"], 0.0);
    assert!(view["chart"]["series"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_campaign_options_for_selector(pool: PgPool) {
    create_campaign(&pool, "Older", "2024-11-01").await;
    let newer = create_campaign(&pool, "Newer", "2025-02-01").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/dashboard/campaigns").await).await;
    let options = json["data"].as_array().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0]["campaign_id"], newer);
    assert_eq!(options[0]["name"], "Newer");
    assert!(options[0].get("budget").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_campaign_options_empty_when_no_campaigns(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/dashboard/campaigns").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}
