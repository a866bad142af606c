//! CSV coverage export.

use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};

use careboard_core::month::MonthRange;
use careboard_core::report;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/months/{month}/export", get(export_month))
}

/// GET /months/:month/export - Coverage report as a CSV attachment
///
/// Store failures surface as a JSON error body, never a partial CSV.
async fn export_month(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Response, AppError> {
    let range = MonthRange::from_slug(&month)?;

    let store = state.store()?;
    let events = store.events_in(&range)?;
    let ledger = store.ledger()?;

    let event_ids: Vec<i64> = events.iter().map(|event| event.id).collect();
    let counts = ledger.counts_for(&event_ids);

    let rows = report::month_report(&events, &counts);
    let csv = report::render_csv(&rows);

    let disposition = format!(
        "attachment; filename=\"{}\"",
        report::export_filename(&range.slug())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
        csv,
    )
        .into_response())
}
