//! Repository for the `campaign` table.

use mcm_core::types::DbId;
use sqlx::PgPool;

use crate::models::campaign::{
    Campaign, CampaignOption, CreateCampaign, DeleteCampaign, DEFAULT_OWNER_USER_ID,
};
use crate::transaction;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "campaign_id, user_id, name, budget, start_date, end_date, description";

/// Provides create, read, and delete operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a new campaign, returning the created row.
    ///
    /// If `user_id` is `None` the campaign is owned by [`DEFAULT_OWNER_USER_ID`].
    pub async fn create(pool: &PgPool, input: &CreateCampaign) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaign (user_id, name, budget, start_date, end_date, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let result = sqlx::query_as::<_, Campaign>(&query)
            .bind(input.user_id.unwrap_or(DEFAULT_OWNER_USER_ID))
            .bind(&input.name)
            .bind(input.budget)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await;
        transaction::finish(tx, result).await
    }

    /// Find a campaign by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaign WHERE campaign_id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all campaigns, most recent start date first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Campaign>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaign ORDER BY start_date DESC, campaign_id DESC"
        );
        sqlx::query_as::<_, Campaign>(&query).fetch_all(pool).await
    }

    /// List `(campaign_id, name)` pairs for the dashboard selector, most
    /// recent start date first.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<CampaignOption>, sqlx::Error> {
        sqlx::query_as::<_, CampaignOption>(
            "SELECT campaign_id, name FROM campaign ORDER BY start_date DESC, campaign_id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Permanently delete a campaign. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while the campaign still owns
    /// channels; the transaction is rolled back in that case.
    pub async fn delete(pool: &PgPool, command: &DeleteCampaign) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("DELETE FROM campaign WHERE campaign_id = $1")
            .bind(command.campaign_id)
            .execute(&mut *tx)
            .await
            .map(|r| r.rows_affected() > 0);
        transaction::finish(tx, result).await
    }
}
