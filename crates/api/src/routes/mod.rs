//! HTTP routes

use axum::Router;

use crate::state::AppState;

pub mod developers;
pub mod health;

/// Assembles the full route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(developers::router())
        .with_state(state)
}
