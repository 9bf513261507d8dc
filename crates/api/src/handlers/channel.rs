//! Handlers for campaign channels and their performance records.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mcm_core::error::CoreError;
use mcm_core::types::DbId;
use mcm_core::validation::validate_command;
use mcm_db::models::channel::{Channel, CreateChannel};
use mcm_db::models::performance::{PerformanceRecord, RecordPerformance};
use mcm_db::repositories::{ChannelRepo, PerformanceRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::campaign::find_campaign;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/campaigns/{id}/channels
pub async fn list_by_campaign(
    State(state): State<AppState>,
    Path(campaign_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Channel>>>> {
    find_campaign(&state.pool, campaign_id).await?;
    let channels = ChannelRepo::list_by_campaign(&state.pool, campaign_id).await?;
    Ok(Json(DataResponse { data: channels }))
}

/// POST /api/v1/campaigns/{id}/channels
pub async fn create(
    State(state): State<AppState>,
    Path(campaign_id): Path<DbId>,
    AppJson(input): AppJson<CreateChannel>,
) -> AppResult<(StatusCode, Json<Channel>)> {
    validate_command(&input)?;
    find_campaign(&state.pool, campaign_id).await?;

    let channel = ChannelRepo::create(&state.pool, campaign_id, &input).await?;
    tracing::info!(campaign_id, channel_id = channel.channel_id, "Channel created");
    Ok((StatusCode::CREATED, Json(channel)))
}

/// POST /api/v1/channels/{channel_id}/performance
pub async fn record_performance(
    State(state): State<AppState>,
    Path(channel_id): Path<DbId>,
    AppJson(input): AppJson<RecordPerformance>,
) -> AppResult<(StatusCode, Json<PerformanceRecord>)> {
    validate_command(&input)?;
    ChannelRepo::find_by_id(&state.pool, channel_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Channel",
            id: channel_id,
        }))?;

    let record = PerformanceRepo::record(&state.pool, channel_id, &input).await?;
    tracing::debug!(
        channel_id,
        metric_name = %record.metric_name,
        metric_value = record.metric_value,
        "Performance recorded"
    );
    Ok((StatusCode::CREATED, Json(record)))
}
