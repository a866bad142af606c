//! Core library for the careboard portal.
//!
//! This crate holds the month-scoped scheduling and coverage domain shared
//! by the CLI and the HTTP server:
//! - `month` / `catalog` for UTC month boundaries and the month picker
//! - `grid` for the week-aligned calendar layout
//! - `ledger` / `coverage` for signup membership and fullness
//! - `report` for the CSV coverage export
//! - `careboard` for the configured store handle

pub mod careboard;
pub mod catalog;
pub mod config;
pub mod coverage;
pub mod error;
pub mod event;
pub mod grid;
pub mod ledger;
pub mod month;
pub mod report;

pub use careboard::Careboard;
pub use error::{CareboardError, CareboardResult};
pub use event::{Event, Participant, Role};
