//! Campaign channel entity model and commands.

use mcm_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `campaign_channel` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Channel {
    pub channel_id: DbId,
    pub campaign_id: DbId,
    /// Display label such as `"email"`; optional.
    pub name: Option<String>,
}

/// Command for attaching a channel to a campaign. The campaign id comes
/// from the request path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateChannel {
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub name: Option<String>,
}
