//! Repository for the `campaign_channel` table.

use mcm_core::types::DbId;
use sqlx::PgPool;

use crate::models::channel::{Channel, CreateChannel};
use crate::transaction;

const COLUMNS: &str = "channel_id, campaign_id, name";

pub struct ChannelRepo;

impl ChannelRepo {
    /// Attach a new channel to `campaign_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        campaign_id: DbId,
        input: &CreateChannel,
    ) -> Result<Channel, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaign_channel (campaign_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let mut tx = pool.begin().await?;
        let result = sqlx::query_as::<_, Channel>(&query)
            .bind(campaign_id)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await;
        transaction::finish(tx, result).await
    }

    /// Find a channel by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Channel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaign_channel WHERE channel_id = $1");
        sqlx::query_as::<_, Channel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a campaign's channels in creation order.
    pub async fn list_by_campaign(
        pool: &PgPool,
        campaign_id: DbId,
    ) -> Result<Vec<Channel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaign_channel WHERE campaign_id = $1 ORDER BY channel_id"
        );
        sqlx::query_as::<_, Channel>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await
    }
}
