//! Portal-neutral event and identity types.
//!
//! Events are created by an external staff-management flow and are read-only
//! here. Participant identities come from the external identity collaborator;
//! this crate only reads them to scope ledger queries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CareboardError;

/// A published care event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    /// Category used for filtering (e.g. "Social", "Transport").
    #[serde(default)]
    pub category: Option<String>,
    /// Start instant, stored and compared in UTC.
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub duration_minutes: u32,
    /// Target headcount; 0 means no explicit target.
    #[serde(default)]
    pub target_headcount: u32,
}

impl Event {
    /// End instant derived from the duration. May cross the month boundary;
    /// month membership is decided by `start` alone.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(i64::from(self.duration_minutes))
    }
}

/// Role tag supplied by the identity collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Staff,
    Volunteer,
    Caregiver,
    CareRecipient,
}

impl FromStr for Role {
    type Err = CareboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "staff" => Ok(Role::Staff),
            "volunteer" => Ok(Role::Volunteer),
            "caregiver" => Ok(Role::Caregiver),
            "care_recipient" => Ok(Role::CareRecipient),
            other => Err(CareboardError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Staff => "staff",
            Role::Volunteer => "volunteer",
            Role::Caregiver => "caregiver",
            Role::CareRecipient => "care_recipient",
        };
        f.write_str(s)
    }
}

/// An authenticated participant: opaque id plus role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_end_adds_duration() {
        let event = Event {
            id: 1,
            name: "Lunch club".to_string(),
            category: None,
            start: Utc.with_ymd_and_hms(2026, 2, 7, 12, 0, 0).unwrap(),
            duration_minutes: 90,
            target_headcount: 0,
        };

        assert_eq!(event.end(), Utc.with_ymd_and_hms(2026, 2, 7, 13, 30, 0).unwrap());
    }

    #[test]
    fn test_event_end_can_cross_month_boundary() {
        let event = Event {
            id: 2,
            name: "Night shift".to_string(),
            category: None,
            start: Utc.with_ymd_and_hms(2026, 2, 28, 23, 0, 0).unwrap(),
            duration_minutes: 120,
            target_headcount: 0,
        };

        assert_eq!(event.end(), Utc.with_ymd_and_hms(2026, 3, 1, 1, 0, 0).unwrap());
    }

    #[test]
    fn test_role_round_trip() {
        for (text, role) in [
            ("staff", Role::Staff),
            ("volunteer", Role::Volunteer),
            ("caregiver", Role::Caregiver),
            ("care_recipient", Role::CareRecipient),
        ] {
            assert_eq!(text.parse::<Role>().unwrap(), role);
            assert_eq!(role.to_string(), text);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(matches!(
            "admin".parse::<Role>(),
            Err(CareboardError::UnknownRole(_))
        ));
    }
}
