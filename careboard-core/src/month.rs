//! UTC-anchored month boundaries.
//!
//! A month is identified by a `"YYYY-MM"` slug and spans the half-open
//! interval `[midnight UTC of day 1, midnight UTC of day 1 of the next
//! month)`. All boundary math is done in UTC; only display labels are
//! formatted for humans.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{CareboardError, CareboardResult};

/// The extent of one calendar month as a half-open UTC instant range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// A month as presented in pickers: slug plus human label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthItem {
    pub slug: String,
    pub label: String,
}

impl MonthRange {
    /// Parse a `"YYYY-MM"` slug into the month's boundary range.
    ///
    /// The slug must be exactly four digits, a dash, and two digits, with
    /// the month between 01 and 12.
    pub fn from_slug(slug: &str) -> CareboardResult<Self> {
        let invalid = || CareboardError::InvalidMonthSlug(slug.to_string());

        let (year_part, month_part) = slug.split_once('-').ok_or_else(invalid)?;

        if year_part.len() != 4
            || month_part.len() != 2
            || !year_part.bytes().all(|b| b.is_ascii_digit())
            || !month_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        let start = first_of_month(year, month).ok_or_else(invalid)?;

        // December rolls over into January of the next year
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let end = first_of_month(next_year, next_month).ok_or_else(invalid)?;

        Ok(MonthRange { start, end })
    }

    /// The month containing the given instant.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        // Slugs derived from an instant are always well-formed
        Self::from_slug(&slug_for(instant)).expect("instant projects to a valid slug")
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether the instant falls inside the half-open range.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// The `"YYYY-MM"` slug for this month.
    pub fn slug(&self) -> String {
        slug_for(self.start)
    }

    /// Human label, short month name plus year (e.g. "Feb 2026").
    pub fn label(&self) -> String {
        self.start.format("%b %Y").to_string()
    }

    /// The month's UTC calendar days in order (28-31 entries).
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut day = self.start.date_naive();
        let end = self.end.date_naive();

        while day < end {
            days.push(day);
            day = day.succ_opt().expect("date within chrono range");
        }

        days
    }

    /// The `MonthItem` for pickers.
    pub fn item(&self) -> MonthItem {
        MonthItem {
            slug: self.slug(),
            label: self.label(),
        }
    }
}

/// Project an instant onto its UTC month slug.
pub fn slug_for(instant: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", instant.year(), instant.month())
}

fn first_of_month(year: i32, month: u32) -> Option<DateTime<Utc>> {
    Some(
        NaiveDate::from_ymd_opt(year, month, 1)?
            .and_hms_opt(0, 0, 0)?
            .and_utc(),
    )
}
