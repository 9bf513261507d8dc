//! Campaign entity model and commands.

use mcm_core::types::{CalendarDate, DbId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Owner assigned to campaigns created without an explicit `user_id`.
pub const DEFAULT_OWNER_USER_ID: DbId = 1;

/// A row from the `campaign` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub campaign_id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub budget: Decimal,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub description: Option<String>,
}

/// Lightweight projection used to populate the dashboard campaign selector.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CampaignOption {
    pub campaign_id: DbId,
    pub name: String,
}

/// Command for creating a new campaign.
///
/// An `end_date` earlier than `start_date` is accepted as-is.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCampaign {
    /// Falls back to the configured default owner if omitted.
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub user_id: Option<DbId>,
    #[validate(
        custom(function = "mcm_core::validation::not_blank"),
        length(max = 255, message = "must be at most 255 characters")
    )]
    pub name: String,
    #[validate(custom(function = "valid_budget"))]
    pub budget: Decimal,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub description: Option<String>,
}

/// Command for permanently deleting a campaign.
#[derive(Debug, Clone, Copy, Validate)]
pub struct DeleteCampaign {
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub campaign_id: DbId,
}

/// Exclusive upper bound for budgets: `NUMERIC(12,2)` holds ten integer digits.
const BUDGET_LIMIT: i64 = 10_000_000_000;

fn budget_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn valid_budget(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(budget_error("negative", "must not be negative"));
    }
    if value.round_dp(2) != *value {
        return Err(budget_error("precision", "must have at most two decimal places"));
    }
    if *value >= Decimal::from(BUDGET_LIMIT) {
        return Err(budget_error("too_large", "must be less than 10000000000"));
    }
    Ok(())
}
