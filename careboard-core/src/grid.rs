//! Week-aligned calendar grid for a month.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::event::Event;
use crate::month::MonthRange;

/// One cell of the calendar grid: padding, or a UTC calendar day with the
/// events starting on it.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// `None` for leading/trailing padding cells.
    pub date: Option<NaiveDate>,
    /// Events starting on this day, sorted by start time then id. Always
    /// empty for padding cells. Returned in full; any display cap ("first
    /// 3 + N more") is the presenting caller's decision.
    pub events: Vec<Event>,
}

impl GridCell {
    fn blank() -> Self {
        GridCell {
            date: None,
            events: Vec::new(),
        }
    }

    fn day(date: NaiveDate, events: Vec<Event>) -> Self {
        GridCell {
            date: Some(date),
            events,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.date.is_none()
    }
}

/// Build the rectangular grid for a month: leading blanks so the grid starts
/// on Sunday, one cell per day, trailing blanks to a multiple of 7.
///
/// Events are bucketed into the UTC calendar day their start instant falls
/// on. Events outside the month are ignored.
pub fn build_grid(range: &MonthRange, events: &[Event]) -> Vec<GridCell> {
    let mut by_day: HashMap<NaiveDate, Vec<Event>> = HashMap::new();

    for event in events {
        if !range.contains(event.start) {
            continue;
        }
        by_day
            .entry(event.start.date_naive())
            .or_default()
            .push(event.clone());
    }

    for day_events in by_day.values_mut() {
        day_events.sort_by(|a, b| a.start.cmp(&b.start).then(a.id.cmp(&b.id)));
    }

    let mut cells = Vec::new();

    // UTC day-of-week of day 1, Sunday = 0
    let leading = range.start().date_naive().weekday().num_days_from_sunday();
    for _ in 0..leading {
        cells.push(GridCell::blank());
    }

    for date in range.days() {
        let day_events = by_day.remove(&date).unwrap_or_default();
        cells.push(GridCell::day(date, day_events));
    }

    while cells.len() % 7 != 0 {
        cells.push(GridCell::blank());
    }

    cells
}
