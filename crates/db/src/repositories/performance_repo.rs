//! Repository for the `performance_data` table.

use mcm_core::types::DbId;
use sqlx::PgPool;

use crate::models::performance::{MetricTotalRow, PerformanceRecord, RecordPerformance};
use crate::transaction;

const COLUMNS: &str = "performance_id, channel_id, metric_name, metric_value";

/// Provides insert and aggregation queries for performance records.
pub struct PerformanceRepo;

impl PerformanceRepo {
    /// Record one metric observation against a channel.
    pub async fn record(
        pool: &PgPool,
        channel_id: DbId,
        input: &RecordPerformance,
    ) -> Result<PerformanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO performance_data (channel_id, metric_name, metric_value)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let result = sqlx::query_as::<_, PerformanceRecord>(&query)
            .bind(channel_id)
            .bind(&input.metric_name)
            .bind(input.metric_value)
            .fetch_one(&mut *tx)
            .await;
        transaction::finish(tx, result).await
    }

    /// Sum performance values across all of a campaign's channels, grouped by
    /// metric name and ordered by name.
    ///
    /// Returns an empty vector when the campaign has no channels or records.
    pub async fn totals_by_campaign(
        pool: &PgPool,
        campaign_id: DbId,
    ) -> Result<Vec<MetricTotalRow>, sqlx::Error> {
        sqlx::query_as::<_, MetricTotalRow>(
            "SELECT pd.metric_name, SUM(pd.metric_value) AS total_value
             FROM performance_data pd
             JOIN campaign_channel cc ON pd.channel_id = cc.channel_id
             WHERE cc.campaign_id = $1
             GROUP BY pd.metric_name
             ORDER BY pd.metric_name",
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await
    }
}
