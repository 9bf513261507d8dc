use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET    /campaigns         -> campaign_options
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/campaigns", get(dashboard::campaign_options))
}
