use axum::routing::post;
use axum::Router;

use crate::handlers::channel;
use crate::state::AppState;

/// Routes mounted at `/channels`.
///
/// ```text
/// POST   /{channel_id}/performance      -> record_performance
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{channel_id}/performance", post(channel::record_performance))
}
