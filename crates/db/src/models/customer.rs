//! Customer entity model and commands.

use mcm_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `customer` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub customer_id: DbId,
    pub name: String,
    pub email: String,
}

/// Command for adding a customer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomer {
    #[validate(
        custom(function = "mcm_core::validation::not_blank"),
        length(max = 255, message = "must be at most 255 characters")
    )]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}
