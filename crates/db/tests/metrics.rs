//! Integration tests for per-campaign metric aggregation.

use chrono::NaiveDate;
use mcm_core::types::DbId;
use mcm_db::models::campaign::CreateCampaign;
use mcm_db::models::channel::CreateChannel;
use mcm_db::models::performance::RecordPerformance;
use mcm_db::repositories::{CampaignRepo, ChannelRepo, PerformanceRepo};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_campaign(pool: &PgPool, name: &str) -> DbId {
    let input = CreateCampaign {
        user_id: None,
        name: name.to_string(),
        budget: Decimal::ZERO,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        description: None,
    };
    CampaignRepo::create(pool, &input).await.unwrap().campaign_id
}

async fn seed_channel(pool: &PgPool, campaign_id: DbId, name: &str) -> DbId {
    let input = CreateChannel {
        name: Some(name.to_string()),
    };
    ChannelRepo::create(pool, campaign_id, &input)
        .await
        .unwrap()
        .channel_id
}

async fn record(pool: &PgPool, channel_id: DbId, metric_name: &str, metric_value: f64) {
    let input = RecordPerformance {
        metric_name: metric_name.to_string(),
        metric_value,
    };
    PerformanceRepo::record(pool, channel_id, &input).await.unwrap();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_campaign_without_channels_has_empty_totals(pool: PgPool) {
    let campaign_id = seed_campaign(&pool, "Empty").await;

    let totals = mcm_db::aggregate_metrics(&pool, campaign_id).await.unwrap();
    assert!(totals.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_channel_without_records_has_empty_totals(pool: PgPool) {
    let campaign_id = seed_campaign(&pool, "Quiet").await;
    seed_channel(&pool, campaign_id, "email").await;

    let totals = mcm_db::aggregate_metrics(&pool, campaign_id).await.unwrap();
    assert!(totals.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_two_channel_campaign_sums_by_metric_name(pool: PgPool) {
    let c1 = seed_campaign(&pool, "C1").await;
    let a = seed_channel(&pool, c1, "A").await;
    let b = seed_channel(&pool, c1, "B").await;
    record(&pool, a, "Emails Sent", 100.0).await;
    record(&pool, a, "Open Rate", 25.5).await;
    record(&pool, b, "Emails Sent", 50.0).await;

    let totals = mcm_db::aggregate_metrics(&pool, c1).await.unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals.get("Emails Sent"), Some(150.0));
    assert_eq!(totals.get("Open Rate"), Some(25.5));
    assert_eq!(totals.get("Click-Through Rate"), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_other_campaigns_records_are_excluded(pool: PgPool) {
    let mine = seed_campaign(&pool, "Mine").await;
    let theirs = seed_campaign(&pool, "Theirs").await;
    let my_channel = seed_channel(&pool, mine, "email").await;
    let their_channel = seed_channel(&pool, theirs, "email").await;
    record(&pool, my_channel, "Emails Sent", 10.0).await;
    record(&pool, their_channel, "Emails Sent", 999.0).await;

    let totals = mcm_db::aggregate_metrics(&pool, mine).await.unwrap();
    assert_eq!(totals.get("Emails Sent"), Some(10.0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_totals_rows_are_ordered_by_metric_name(pool: PgPool) {
    let campaign_id = seed_campaign(&pool, "Ordered").await;
    let channel_id = seed_channel(&pool, campaign_id, "email").await;
    record(&pool, channel_id, "Open Rate", 1.0).await;
    record(&pool, channel_id, "Click-Through Rate", 2.0).await;
    record(&pool, channel_id, "Emails Sent", 3.0).await;

    let rows = PerformanceRepo::totals_by_campaign(&pool, campaign_id)
        .await
        .unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.metric_name.as_str()).collect();
    assert_eq!(names, vec!["Click-Through Rate", "Emails Sent", "Open Rate"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_campaign_has_empty_totals(pool: PgPool) {
    let totals = mcm_db::aggregate_metrics(&pool, 424_242).await.unwrap();
    assert!(totals.is_empty());
}
