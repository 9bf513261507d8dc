//! Handlers for the `/customers` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use mcm_core::validation::validate_command;
use mcm_db::models::customer::{CreateCustomer, Customer};
use mcm_db::repositories::CustomerRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /customers`.
#[derive(Debug, Deserialize)]
pub struct CustomerQuery {
    /// Exact email match. When set the result holds zero or one customer.
    pub email: Option<String>,
}

/// GET /api/v1/customers
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CustomerQuery>,
) -> AppResult<Json<DataResponse<Vec<Customer>>>> {
    let customers = match params.email {
        Some(email) => CustomerRepo::find_by_email(&state.pool, &email)
            .await?
            .into_iter()
            .collect(),
        None => CustomerRepo::list(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: customers }))
}

/// POST /api/v1/customers
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    validate_command(&input)?;

    let customer = CustomerRepo::create(&state.pool, &input).await?;
    tracing::info!(customer_id = customer.customer_id, "Customer created");
    Ok((StatusCode::CREATED, Json(customer)))
}
