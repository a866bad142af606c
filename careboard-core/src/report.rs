//! Coverage report: tabular rows and CSV serialization.

use std::collections::BTreeMap;

use chrono::SecondsFormat;

use crate::coverage::{self, CoverageStatus};
use crate::event::Event;

const CSV_HEADER: [&str; 6] = ["event_id", "name", "date_time", "needed", "signed_up", "status"];

/// One row of the month coverage report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub event_id: i64,
    pub name: String,
    pub date_time: String,
    pub needed: u32,
    pub signed_up: u32,
    pub status: &'static str,
}

/// Collapse the tri-state coverage status into the report's two values.
///
/// `Unspecified` exports as "Not enough": events without a declared target
/// are never reported as covered.
pub fn coverage_label(status: CoverageStatus) -> &'static str {
    if status.is_full() { "Enough" } else { "Not enough" }
}

/// Project events plus ledger counts into report rows, ordered by start time
/// ascending (event id breaks ties).
pub fn month_report(events: &[Event], counts: &BTreeMap<i64, u32>) -> Vec<ReportRow> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by(|a, b| a.start.cmp(&b.start).then(a.id.cmp(&b.id)));

    ordered
        .into_iter()
        .map(|event| {
            let signed = counts.get(&event.id).copied().unwrap_or(0);
            let coverage = coverage::coverage(event.target_headcount, signed);

            ReportRow {
                event_id: event.id,
                name: event.name.clone(),
                date_time: event.start.to_rfc3339_opts(SecondsFormat::Secs, true),
                needed: event.target_headcount,
                signed_up: signed,
                status: coverage_label(coverage.status),
            }
        })
        .collect()
}

/// Serialize rows as CSV text: literal header row, one line per row, lines
/// joined by `\n` with no trailing newline.
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for row in rows {
        let fields = [
            row.event_id.to_string(),
            row.name.clone(),
            row.date_time.clone(),
            row.needed.to_string(),
            row.signed_up.to_string(),
            row.status.to_string(),
        ];
        let line = fields
            .iter()
            .map(|field| csv_escape(field))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(line);
    }

    lines.join("\n")
}

/// The attachment filename for a month's export.
pub fn export_filename(slug: &str) -> String {
    format!("events_{slug}.csv")
}

/// Quote a field when it contains a comma, quote, or newline, doubling any
/// embedded quotes.
fn csv_escape(field: &str) -> String {
    if field.contains('"') || field.contains(',') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_event(id: i64, name: &str, needed: u32) -> Event {
        Event {
            id,
            name: name.to_string(),
            category: None,
            start: Utc.with_ymd_and_hms(2026, 2, 7, 10, 0, 0).unwrap(),
            duration_minutes: 60,
            target_headcount: needed,
        }
    }

    #[test]
    fn test_covered_event_exports_enough() {
        let events = vec![make_event(3, "Bingo", 2)];
        let counts = BTreeMap::from([(3, 2)]);

        let rows = month_report(&events, &counts);
        let csv = render_csv(&rows);

        assert_eq!(
            csv,
            "event_id,name,date_time,needed,signed_up,status\n\
             3,Bingo,2026-02-07T10:00:00Z,2,2,Enough"
        );
    }

    #[test]
    fn test_unspecified_target_exports_not_enough() {
        assert_eq!(coverage_label(CoverageStatus::Unspecified), "Not enough");
        assert_eq!(coverage_label(CoverageStatus::Open), "Not enough");
        assert_eq!(coverage_label(CoverageStatus::Full), "Enough");
    }

    #[test]
    fn test_rows_ordered_by_start_time() {
        let mut early = make_event(5, "Early", 1);
        early.start = Utc.with_ymd_and_hms(2026, 2, 1, 8, 0, 0).unwrap();
        let late = make_event(2, "Late", 1);

        let rows = month_report(&[late, early], &BTreeMap::new());
        let ids: Vec<i64> = rows.iter().map(|r| r.event_id).collect();
        assert_eq!(ids, [5, 2]);
    }

    #[test]
    fn test_missing_count_defaults_to_zero() {
        let rows = month_report(&[make_event(1, "Walk", 3)], &BTreeMap::new());
        assert_eq!(rows[0].signed_up, 0);
        assert_eq!(rows[0].status, "Not enough");
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_quoted() {
        let events = vec![make_event(1, "Lunch, \"special\" menu", 1)];
        let counts = BTreeMap::from([(1, 1)]);

        let csv = render_csv(&month_report(&events, &counts));
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("1,\"Lunch, \"\"special\"\" menu\","));
    }

    #[test]
    fn test_empty_month_exports_header_only() {
        let csv = render_csv(&month_report(&[], &BTreeMap::new()));
        assert_eq!(csv, "event_id,name,date_time,needed,signed_up,status");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("2026-02"), "events_2026-02.csv");
    }
}
