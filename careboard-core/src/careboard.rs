//! Careboard store handle: configured access to the event and signup stores.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use ::config::{Config, File};

use crate::catalog;
use crate::config::CareboardConfig;
use crate::error::{CareboardError, CareboardResult};
use crate::event::Event;
use crate::ledger::{CapacityPolicy, SignupLedger};
use crate::month::{MonthItem, MonthRange};

const EVENTS_FILE: &str = "events.json";
const SIGNUPS_FILE: &str = "signups.json";

// Serializes conflicting ledger writes within the process, so a racing
// duplicate join resolves to one success and one AlreadyJoined.
static WRITE_LOCK: Mutex<()> = Mutex::new(());

fn write_guard() -> MutexGuard<'static, ()> {
    WRITE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Handle over the configured data directory.
#[derive(Clone)]
pub struct Careboard {
    config: CareboardConfig,
}

impl Careboard {
    /// Load from the global config file, falling back to defaults when the
    /// file is absent.
    pub fn load() -> CareboardResult<Self> {
        let config_path = CareboardConfig::config_path()?;

        let config: CareboardConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| CareboardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CareboardError::Config(e.to_string()))?;

        Ok(Careboard { config })
    }

    /// Bind a concrete data directory, bypassing the global config file.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Careboard {
            config: CareboardConfig {
                data_dir: data_dir.into(),
                ..CareboardConfig::default()
            },
        }
    }

    /// Same handle with a different capacity policy.
    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.config.capacity_policy = policy;
        self
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.config.capacity_policy
    }

    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    fn events_path(&self) -> PathBuf {
        self.data_path().join(EVENTS_FILE)
    }

    fn signups_path(&self) -> PathBuf {
        self.data_path().join(SIGNUPS_FILE)
    }

    /// All published events. A missing store file reads as empty; a corrupt
    /// one is a typed error, not an empty list.
    pub fn all_events(&self) -> CareboardResult<Vec<Event>> {
        read_json(&self.events_path())
    }

    /// Events starting within the month, sorted by start time then id.
    pub fn events_in(&self, range: &MonthRange) -> CareboardResult<Vec<Event>> {
        self.events_in_category(range, None)
    }

    /// Month query with an optional category filter.
    pub fn events_in_category(
        &self,
        range: &MonthRange,
        category: Option<&str>,
    ) -> CareboardResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .all_events()?
            .into_iter()
            .filter(|event| range.contains(event.start))
            .filter(|event| match category {
                Some(wanted) => event.category.as_deref() == Some(wanted),
                None => true,
            })
            .collect();

        events.sort_by(|a, b| a.start.cmp(&b.start).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    /// Look an event up by id.
    pub fn event(&self, event_id: i64) -> CareboardResult<Event> {
        self.all_events()?
            .into_iter()
            .find(|event| event.id == event_id)
            .ok_or(CareboardError::EventNotFound(event_id))
    }

    pub fn all_event_starts(&self) -> CareboardResult<Vec<DateTime<Utc>>> {
        Ok(self.all_events()?.into_iter().map(|event| event.start).collect())
    }

    /// The distinct months with events, most recent first. Store failures
    /// propagate as typed errors; callers choose their own fallback.
    pub fn available_months(&self) -> CareboardResult<Vec<MonthItem>> {
        Ok(catalog::available_months(&self.all_event_starts()?))
    }

    /// The current signup ledger.
    pub fn ledger(&self) -> CareboardResult<SignupLedger> {
        read_json(&self.signups_path())
    }

    /// Sign a participant up for an event.
    ///
    /// Fails with `EventNotFound` for an unknown event, `AlreadyJoined` for
    /// an existing pair, and (under the enforced policy) `EventFull` when a
    /// nonzero target is already met.
    pub fn join(&self, event_id: i64, participant_id: &str) -> CareboardResult<()> {
        let _guard = write_guard();

        let event = self.event(event_id)?;
        let mut ledger = self.ledger()?;

        if self.config.capacity_policy == CapacityPolicy::Enforced
            && event.target_headcount > 0
            && ledger.count_for(event_id) >= event.target_headcount
        {
            return Err(CareboardError::EventFull(event_id));
        }

        ledger.join(event_id, participant_id)?;
        self.write_ledger(&ledger)
    }

    /// Withdraw a participant from an event. Fails with `NotJoined` when the
    /// pair does not exist (including unknown event ids, for which no pair
    /// can exist).
    pub fn leave(&self, event_id: i64, participant_id: &str) -> CareboardResult<()> {
        let _guard = write_guard();

        let mut ledger = self.ledger()?;
        ledger.leave(event_id, participant_id)?;
        self.write_ledger(&ledger)
    }

    fn write_ledger(&self, ledger: &SignupLedger) -> CareboardResult<()> {
        let path = self.signups_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(ledger)
            .map_err(|e| CareboardError::Serialization(e.to_string()))?;

        // Write-then-rename keeps the store readable if we die mid-write
        let temp = path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned + Default>(path: &Path) -> CareboardResult<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| CareboardError::Serialization(format!("{}: {}", path.display(), e)))
}
