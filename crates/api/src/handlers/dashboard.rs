//! Handlers for the campaign performance dashboard.

use axum::extract::{Path, State};
use axum::Json;
use mcm_core::dashboard::{build_dashboard_view, DashboardView};
use mcm_core::types::DbId;
use mcm_db::models::campaign::CampaignOption;
use mcm_db::repositories::CampaignRepo;

use crate::error::AppResult;
use crate::handlers::campaign::find_campaign;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/campaigns
///
/// Options for the campaign selector, most recent start date first. An
/// empty list means no campaigns exist yet.
pub async fn campaign_options(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CampaignOption>>>> {
    let options = CampaignRepo::list_options(&state.pool).await?;
    Ok(Json(DataResponse { data: options }))
}

/// GET /api/v1/campaigns/{id}/dashboard
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DashboardView>>> {
    let campaign = find_campaign(&state.pool, id).await?;
    let totals = mcm_db::aggregate_metrics(&state.pool, id).await?;
    let view = build_dashboard_view(campaign.campaign_id, &campaign.name, &totals);
    Ok(Json(DataResponse { data: view }))
}
