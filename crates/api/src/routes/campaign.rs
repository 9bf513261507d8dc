//! Route definitions for the `/campaigns` resource.
//!
//! Also nests the campaign's channel routes and its metrics/dashboard reads.

use axum::routing::get;
use axum::Router;

use crate::handlers::{campaign, channel, dashboard};
use crate::state::AppState;

/// Routes mounted at `/campaigns`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// DELETE /{id}                          -> delete
/// GET    /{id}/metrics                  -> metrics
/// GET    /{id}/dashboard                -> dashboard::view
///
/// GET    /{id}/channels                 -> channel::list_by_campaign
/// POST   /{id}/channels                 -> channel::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(campaign::list).post(campaign::create))
        .route("/{id}", get(campaign::get_by_id).delete(campaign::delete))
        .route("/{id}/metrics", get(campaign::metrics))
        .route("/{id}/dashboard", get(dashboard::view))
        .route(
            "/{id}/channels",
            get(channel::list_by_campaign).post(channel::create),
        )
}
