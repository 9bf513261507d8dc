pub mod campaign;
pub mod channel;
pub mod customer;
pub mod dashboard;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard/campaigns                 campaign selector options
///
/// /campaigns                           list, create
/// /campaigns/{id}                      get, delete
/// /campaigns/{id}/metrics              aggregated metric totals
/// /campaigns/{id}/dashboard            dashboard view
/// /campaigns/{id}/channels             list, create
///
/// /channels/{channel_id}/performance   record a metric (POST)
///
/// /customers                           list (optional ?email=), create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dashboard", dashboard::router())
        .nest("/campaigns", campaign::router())
        .nest("/channels", channel::router())
        .nest("/customers", customer::router())
}
