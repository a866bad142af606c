use std::path::PathBuf;

use anyhow::Result;
use careboard_core::{Careboard, CareboardResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // We reload the store on each request to pick up data file changes.
    // None means "use the global config"; tests bind a directory directly.
    data_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        // Verify the store can be loaded at startup
        let _ = Careboard::load()?;
        Ok(AppState { data_dir: None })
    }

    /// Bind a concrete data directory (used by tests).
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        AppState {
            data_dir: Some(data_dir.into()),
        }
    }

    pub fn store(&self) -> CareboardResult<Careboard> {
        match &self.data_dir {
            Some(dir) => Ok(Careboard::open(dir)),
            None => Careboard::load(),
        }
    }
}
