//! # roster-api
//!
//! The developer intake API: a thin HTTP collaborator around the
//! [`roster_validator`] engine.
//!
//! `POST /api/developers` deserializes a developer payload, runs the shared
//! record validator, and answers `200 OK` on acceptance or `422` with the
//! ordered `(field, code)` failure list. The endpoint performs no
//! persistence: acceptance is an acknowledgment only.
//!
//! Response formatting and logging live here; the engine itself emits
//! neither (it returns codes as data).

pub mod config;
pub mod developer;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::SetupError;
use crate::state::AppState;

/// Builds the application router with a freshly configured validator.
///
/// # Errors
///
/// Returns a [`SetupError`] when the developer rule configuration is
/// malformed — a startup failure, never a per-request one.
pub fn app() -> Result<Router, SetupError> {
    let state = AppState::new()?;
    Ok(routes::router(state).layer(TraceLayer::new_for_http()))
}
