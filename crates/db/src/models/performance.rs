//! Performance record model, commands, and aggregate rows.

use mcm_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `performance_data` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PerformanceRecord {
    pub performance_id: DbId,
    pub channel_id: DbId,
    pub metric_name: String,
    pub metric_value: f64,
}

/// Command for recording one metric observation against a channel.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordPerformance {
    #[validate(custom(function = "mcm_core::validation::not_blank"))]
    pub metric_name: String,
    #[validate(custom(function = "mcm_core::validation::finite"))]
    pub metric_value: f64,
}

/// One row of the per-campaign `GROUP BY metric_name` aggregate.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MetricTotalRow {
    pub metric_name: String,
    pub total_value: f64,
}
