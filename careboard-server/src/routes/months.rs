//! Month picker endpoint

use axum::{Json, Router, extract::State, routing::get};

use careboard_core::month::MonthItem;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/months", get(list_months))
}

/// GET /months - Distinct months with events, most recent first
async fn list_months(State(state): State<AppState>) -> Result<Json<Vec<MonthItem>>, AppError> {
    let store = state.store()?;
    let months = store.available_months()?;
    Ok(Json(months))
}
