//! Coverage evaluation: target headcount vs signed-up count.

use serde::Serialize;

/// Tri-state coverage of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    /// Target declared and not yet met.
    Open,
    /// Signed-up count has reached the target.
    Full,
    /// No explicit target declared (target of 0).
    Unspecified,
}

impl CoverageStatus {
    /// Two-state fold used for calendar-cell coloring: `Unspecified` counts
    /// as not full.
    pub fn is_full(self) -> bool {
        matches!(self, CoverageStatus::Full)
    }
}

/// An event's coverage snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coverage {
    pub status: CoverageStatus,
    pub signed: u32,
    pub target: u32,
}

/// Evaluate coverage. Total over all inputs, no error cases.
pub fn coverage(target: u32, signed: u32) -> Coverage {
    let status = if target == 0 {
        CoverageStatus::Unspecified
    } else if signed >= target {
        CoverageStatus::Full
    } else {
        CoverageStatus::Open
    };

    Coverage {
        status,
        signed,
        target,
    }
}
