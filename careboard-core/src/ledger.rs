//! The signup ledger: active (event, participant) membership pairs.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{CareboardError, CareboardResult};

/// One persisted signup row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signup {
    pub event_id: i64,
    pub participant_id: String,
}

/// Whether the declared headcount target gates admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Targets are display-only; over-subscription is permitted.
    #[default]
    Advisory,
    /// A join that would exceed a nonzero target is rejected.
    Enforced,
}

/// The set of active signups.
///
/// A pair exists exactly once or not at all: a second join for the same pair
/// is rejected, never duplicated. The set itself is the uniqueness
/// constraint, so there is no check-then-insert window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Signup>", into = "Vec<Signup>")]
pub struct SignupLedger {
    entries: BTreeSet<(i64, String)>,
}

impl SignupLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_signed_up(&self, event_id: i64, participant_id: &str) -> bool {
        self.entries
            .contains(&(event_id, participant_id.to_string()))
    }

    /// Signed-up count for one event.
    pub fn count_for(&self, event_id: i64) -> u32 {
        self.entries.iter().filter(|(id, _)| *id == event_id).count() as u32
    }

    /// Signed-up counts for a set of events, for in-memory joins against an
    /// event list. Events with no signups are absent from the map.
    pub fn counts_for(&self, event_ids: &[i64]) -> BTreeMap<i64, u32> {
        let wanted: BTreeSet<i64> = event_ids.iter().copied().collect();
        let mut counts = BTreeMap::new();

        for (event_id, _) in &self.entries {
            if wanted.contains(event_id) {
                *counts.entry(*event_id).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Ids of the events one participant is signed up for.
    pub fn signed_event_ids(&self, participant_id: &str) -> BTreeSet<i64> {
        self.entries
            .iter()
            .filter(|(_, pid)| pid == participant_id)
            .map(|(event_id, _)| *event_id)
            .collect()
    }

    /// Insert the pair, rejecting a duplicate with `AlreadyJoined`.
    pub fn join(&mut self, event_id: i64, participant_id: &str) -> CareboardResult<()> {
        if !self.entries.insert((event_id, participant_id.to_string())) {
            return Err(CareboardError::AlreadyJoined(event_id));
        }
        Ok(())
    }

    /// Remove the pair, rejecting a missing one with `NotJoined`.
    pub fn leave(&mut self, event_id: i64, participant_id: &str) -> CareboardResult<()> {
        if !self.entries.remove(&(event_id, participant_id.to_string())) {
            return Err(CareboardError::NotJoined(event_id));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Signup>> for SignupLedger {
    fn from(rows: Vec<Signup>) -> Self {
        let entries = rows
            .into_iter()
            .map(|row| (row.event_id, row.participant_id))
            .collect();
        SignupLedger { entries }
    }
}

impl From<SignupLedger> for Vec<Signup> {
    fn from(ledger: SignupLedger) -> Self {
        ledger
            .entries
            .into_iter()
            .map(|(event_id, participant_id)| Signup {
                event_id,
                participant_id,
            })
            .collect()
    }
}
