//! Terminal rendering for careboard types.
//!
//! Extension traits that add colored output using owo_colors, plus the
//! month calendar layout.

use chrono::Datelike;
use owo_colors::OwoColorize;

use careboard_core::coverage::{Coverage, CoverageStatus};
use careboard_core::grid::GridCell;
use careboard_core::month::MonthItem;

/// How many events to show per calendar day before collapsing to a count.
/// Display decision only; the grid itself always carries the full lists.
const DAY_DISPLAY_CAP: usize = 3;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Coverage {
    fn render(&self) -> String {
        let ratio = format!("{}/{}", self.signed, self.target);
        match self.status {
            CoverageStatus::Full => format!("{} {}", ratio.green(), "full".green()),
            CoverageStatus::Open => format!("{} {}", ratio.yellow(), "open".yellow()),
            CoverageStatus::Unspecified => {
                format!("{} {}", self.signed, "no requirement".dimmed())
            }
        }
    }
}

impl Render for MonthItem {
    fn render(&self) -> String {
        format!("{}  {}", self.slug, self.label.dimmed())
    }
}

/// Render a month's cells as a week-aligned grid of day numbers, followed by
/// each day's events (capped per day, with a "+N more" overflow line).
pub fn render_calendar(label: &str, cells: &[GridCell], is_full: impl Fn(i64) -> bool) -> String {
    let mut lines = Vec::new();

    lines.push(label.bold().to_string());
    lines.push(" Sun Mon Tue Wed Thu Fri Sat".dimmed().to_string());

    for week in cells.chunks(7) {
        let mut row = String::new();
        for cell in week {
            match cell.date {
                Some(date) => {
                    let day = format!("{:>4}", date.day());
                    if cell.events.is_empty() {
                        row.push_str(&day);
                    } else if cell.events.iter().all(|event| is_full(event.id)) {
                        row.push_str(&day.green().to_string());
                    } else {
                        row.push_str(&day.yellow().to_string());
                    }
                }
                None => row.push_str("   ."),
            }
        }
        lines.push(row);
    }

    for cell in cells {
        let Some(date) = cell.date else { continue };
        if cell.events.is_empty() {
            continue;
        }

        lines.push(String::new());
        lines.push(date.format("%a %e %b").to_string().bold().to_string());

        for event in cell.events.iter().take(DAY_DISPLAY_CAP) {
            let marker = if is_full(event.id) {
                "●".green().to_string()
            } else {
                "●".yellow().to_string()
            };
            let time = event.start.format("%H:%M");
            lines.push(format!("  {} {} {}", marker, time, event.name));
        }

        if cell.events.len() > DAY_DISPLAY_CAP {
            let more = cell.events.len() - DAY_DISPLAY_CAP;
            lines.push(format!("  +{} more", more).dimmed().to_string());
        }
    }

    lines.join("\n")
}
