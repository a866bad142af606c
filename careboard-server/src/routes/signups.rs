//! Signup join/withdraw endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::post,
};
use serde::{Deserialize, Serialize};

use careboard_core::month::MonthRange;

use crate::identity::Identity;
use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/months/{month}/signups", post(join).delete(leave))
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub event_id: i64,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub status: &'static str,
}

fn parse_body(
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<SignupRequest, AppError> {
    match body {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

/// POST /months/:month/signups - Sign the viewer up for an event
async fn join(
    State(state): State<AppState>,
    Path(month): Path<String>,
    Identity(participant): Identity,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<SignupResponse>, AppError> {
    // Reject malformed input before touching the store
    let request = parse_body(body)?;
    let _range = MonthRange::from_slug(&month)?;

    let store = state.store()?;
    store.join(request.event_id, &participant.id)?;

    tracing::info!(
        event_id = request.event_id,
        participant = %participant.id,
        role = %participant.role,
        "signup joined"
    );

    Ok(Json(SignupResponse { status: "joined" }))
}

/// DELETE /months/:month/signups - Withdraw the viewer from an event
async fn leave(
    State(state): State<AppState>,
    Path(month): Path<String>,
    Identity(participant): Identity,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<SignupResponse>, AppError> {
    let request = parse_body(body)?;
    let _range = MonthRange::from_slug(&month)?;

    let store = state.store()?;
    store.leave(request.event_id, &participant.id)?;

    tracing::info!(
        event_id = request.event_id,
        participant = %participant.id,
        "signup withdrawn"
    );

    Ok(Json(SignupResponse { status: "left" }))
}
