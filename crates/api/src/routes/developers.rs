//! Developer intake endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use serde::Serialize;

use roster_validator::record::ValidationResult;

use crate::developer::Developer;
use crate::state::AppState;

#[derive(Serialize)]
struct Accepted {
    status: &'static str,
}

#[derive(Serialize)]
struct Rejected {
    errors: ValidationResult,
}

/// `POST /api/developers`
///
/// Validates the payload and acknowledges it. Nothing is persisted:
/// acceptance is a no-op beyond the `200 OK`. A failed validation is a
/// normal response, not a server fault — the failure codes go back to the
/// client for its localization layer to render.
async fn create(State(state): State<AppState>, Json(developer): Json<Developer>) -> Response {
    let result = state.validator().validate(&developer);

    if result.is_valid() {
        tracing::debug!("developer accepted");
        (StatusCode::OK, Json(Accepted { status: "accepted" })).into_response()
    } else {
        tracing::debug!(failures = result.failures().len(), "developer rejected");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Rejected { errors: result }),
        )
            .into_response()
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/developers", post(create))
}
