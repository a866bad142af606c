//! Month event views: list, detail, and calendar grid.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use careboard_core::coverage::{self, Coverage};
use careboard_core::grid;
use careboard_core::month::MonthRange;

use crate::identity::MaybeIdentity;
use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/months/{month}/events", get(list_events))
        .route("/months/{month}/events/{id}", get(event_detail))
        .route("/months/{month}/calendar", get(month_calendar))
}

#[derive(Deserialize)]
pub struct EventsQuery {
    pub category: Option<String>,
}

/// One event as shown on a month page.
#[derive(Serialize)]
pub struct EventSummary {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: u32,
    pub coverage: Coverage,
    /// Whether the viewer is signed up; absent without an identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_up: Option<bool>,
}

/// GET /months/:month/events - The month's events with coverage
async fn list_events(
    State(state): State<AppState>,
    Path(month): Path<String>,
    Query(query): Query<EventsQuery>,
    MaybeIdentity(viewer): MaybeIdentity,
) -> Result<Json<Vec<EventSummary>>, AppError> {
    let range = MonthRange::from_slug(&month)?;

    let store = state.store()?;
    let events = store.events_in_category(&range, query.category.as_deref())?;
    let ledger = store.ledger()?;

    let summaries = events
        .into_iter()
        .map(|event| {
            let signed = ledger.count_for(event.id);
            let signed_up = viewer
                .as_ref()
                .map(|participant| ledger.is_signed_up(event.id, &participant.id));

            EventSummary {
                end: event.end(),
                coverage: coverage::coverage(event.target_headcount, signed),
                signed_up,
                id: event.id,
                name: event.name,
                category: event.category,
                start: event.start,
                duration_minutes: event.duration_minutes,
            }
        })
        .collect();

    Ok(Json(summaries))
}

/// GET /months/:month/events/:id - One event with coverage
async fn event_detail(
    State(state): State<AppState>,
    Path((month, id)): Path<(String, i64)>,
    MaybeIdentity(viewer): MaybeIdentity,
) -> Result<Json<EventSummary>, AppError> {
    let _range = MonthRange::from_slug(&month)?;

    let store = state.store()?;
    let event = store.event(id)?;
    let ledger = store.ledger()?;

    let signed = ledger.count_for(event.id);
    let signed_up = viewer
        .as_ref()
        .map(|participant| ledger.is_signed_up(event.id, &participant.id));

    Ok(Json(EventSummary {
        end: event.end(),
        coverage: coverage::coverage(event.target_headcount, signed),
        signed_up,
        id: event.id,
        name: event.name,
        category: event.category,
        start: event.start,
        duration_minutes: event.duration_minutes,
    }))
}

/// The calendar grid as rendered cells.
#[derive(Serialize)]
pub struct CalendarResponse {
    pub slug: String,
    pub label: String,
    pub cells: Vec<CalendarCell>,
}

#[derive(Serialize)]
pub struct CalendarCell {
    /// Absent for leading/trailing padding cells.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub events: Vec<CalendarCellEvent>,
}

#[derive(Serialize)]
pub struct CalendarCellEvent {
    pub id: i64,
    pub name: String,
    pub signed: u32,
    pub needed: u32,
    /// Two-state coverage used for cell coloring.
    pub full: bool,
}

/// GET /months/:month/calendar - Week-aligned grid of the month
async fn month_calendar(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<CalendarResponse>, AppError> {
    let range = MonthRange::from_slug(&month)?;

    let store = state.store()?;
    let events = store.events_in(&range)?;
    let ledger = store.ledger()?;

    let cells = grid::build_grid(&range, &events)
        .into_iter()
        .map(|cell| CalendarCell {
            date: cell.date,
            events: cell
                .events
                .into_iter()
                .map(|event| {
                    let signed = ledger.count_for(event.id);
                    let status = coverage::coverage(event.target_headcount, signed).status;

                    CalendarCellEvent {
                        id: event.id,
                        name: event.name,
                        signed,
                        needed: event.target_headcount,
                        full: status.is_full(),
                    }
                })
                .collect(),
        })
        .collect();

    Ok(Json(CalendarResponse {
        slug: range.slug(),
        label: range.label(),
        cells,
    }))
}
