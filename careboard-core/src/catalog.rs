//! Month catalog derived from event start times.

use chrono::{DateTime, Utc};

use crate::month::{self, MonthItem, MonthRange};

/// Distill the distinct months that contain at least one event, most recent
/// month first.
///
/// Slugs are projected in UTC, deduplicated, sorted ascending
/// lexicographically (chronological order for zero-padded `YYYY-MM`), then
/// reversed.
pub fn available_months(starts: &[DateTime<Utc>]) -> Vec<MonthItem> {
    let mut slugs: Vec<String> = starts.iter().map(|start| month::slug_for(*start)).collect();
    slugs.sort();
    slugs.dedup();
    slugs.reverse();

    slugs
        .iter()
        .filter_map(|slug| MonthRange::from_slug(slug).ok())
        .map(|range| range.item())
        .collect()
}

/// The default landing month: the most recent month with events, if any.
pub fn default_month(months: &[MonthItem]) -> Option<&MonthItem> {
    months.first()
}
