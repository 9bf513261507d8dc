use axum::routing::get;
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

/// Routes mounted at `/customers`.
///
/// ```text
/// GET    /                  -> list (optional ?email=)
/// POST   /                  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(customer::list).post(customer::create))
}
