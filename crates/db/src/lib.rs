//! Data access layer: connection pool bootstrap, entity models, and
//! repositories issuing parameterized SQL against PostgreSQL.

use mcm_core::metrics::MetricTotals;
use mcm_core::types::DbId;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod transaction;

use repositories::PerformanceRepo;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial statement to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Apply the bundled migrations in `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Sum every performance record of a campaign, grouped by metric name.
///
/// A campaign with no channels or no records yields an empty mapping; a
/// failing query yields `Err`, never an empty mapping.
pub async fn aggregate_metrics(pool: &DbPool, campaign_id: DbId) -> Result<MetricTotals, sqlx::Error> {
    let rows = PerformanceRepo::totals_by_campaign(pool, campaign_id).await?;
    tracing::debug!(campaign_id, metric_count = rows.len(), "Aggregated campaign metrics");
    Ok(rows
        .into_iter()
        .map(|row| (row.metric_name, row.total_value))
        .collect())
}
