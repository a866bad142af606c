//! Global careboard configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{CareboardError, CareboardResult};
use crate::ledger::CapacityPolicy;

static DEFAULT_DATA_PATH: &str = "~/careboard";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

/// Global configuration at ~/.config/careboard/config.toml
///
/// The data directory holds the event and signup stores (events.json,
/// signups.json).
#[derive(Debug, Deserialize, Clone)]
pub struct CareboardConfig {
    #[serde(default = "default_data_path")]
    pub data_dir: PathBuf,

    /// Whether headcount targets gate admission at join time.
    #[serde(default)]
    pub capacity_policy: CapacityPolicy,
}

impl Default for CareboardConfig {
    fn default() -> Self {
        CareboardConfig {
            data_dir: default_data_path(),
            capacity_policy: CapacityPolicy::default(),
        }
    }
}

impl CareboardConfig {
    pub fn config_path() -> CareboardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CareboardError::Config("Could not determine config directory".into()))?
            .join("careboard");

        Ok(config_dir.join("config.toml"))
    }
}
