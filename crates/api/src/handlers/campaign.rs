//! Handlers for the `/campaigns` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mcm_core::error::CoreError;
use mcm_core::metrics::MetricTotals;
use mcm_core::types::DbId;
use mcm_core::validation::validate_command;
use mcm_db::models::campaign::{Campaign, CreateCampaign, DeleteCampaign};
use mcm_db::repositories::CampaignRepo;
use mcm_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a campaign or fail with 404.
pub(crate) async fn find_campaign(pool: &DbPool, id: DbId) -> AppResult<Campaign> {
    CampaignRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))
}

/// POST /api/v1/campaigns
pub async fn create(
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateCampaign>,
) -> AppResult<(StatusCode, Json<Campaign>)> {
    validate_command(&input)?;
    input.user_id = input.user_id.or(Some(state.config.default_owner_user_id));

    let campaign = CampaignRepo::create(&state.pool, &input).await?;
    tracing::info!(campaign_id = campaign.campaign_id, name = %campaign.name, "Campaign created");
    Ok((StatusCode::CREATED, Json(campaign)))
}

/// GET /api/v1/campaigns
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Campaign>>>> {
    let campaigns = CampaignRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: campaigns }))
}

/// GET /api/v1/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Campaign>> {
    let campaign = find_campaign(&state.pool, id).await?;
    Ok(Json(campaign))
}

/// DELETE /api/v1/campaigns/{id}
///
/// Deletion is permanent. A campaign that still owns channels is refused
/// with 409 by the foreign key.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let command = DeleteCampaign { campaign_id: id };
    validate_command(&command)?;

    let deleted = CampaignRepo::delete(&state.pool, &command).await?;
    if deleted {
        tracing::info!(campaign_id = id, "Campaign deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id,
        }))
    }
}

/// GET /api/v1/campaigns/{id}/metrics
///
/// Metric name -> summed value across all of the campaign's channels.
pub async fn metrics(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MetricTotals>>> {
    find_campaign(&state.pool, id).await?;
    let totals = mcm_db::aggregate_metrics(&state.pool, id).await?;
    Ok(Json(DataResponse { data: totals }))
}
