//! JSON-backed review state store.
//!
//! The engine itself never touches storage; this store is the CLI's side
//! of the persistence boundary. One `ReviewState` record per tracked
//! item, kept as pretty-printed JSON at `<data dir>/recall/states.json`
//! next to `config.toml`. `RECALL_HOME` overrides the base directory
//! (used by the E2E tests for isolation).

use std::error::Error;
use std::path::PathBuf;

use recall_core::{ReviewState, SchedulerConfig};

/// Base directory for CLI state and configuration.
pub fn base_dir() -> Result<PathBuf, Box<dyn Error>> {
    if let Ok(home) = std::env::var("RECALL_HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::data_dir()
        .map(|dir| dir.join("recall"))
        .ok_or_else(|| "could not determine a data directory".into())
}

pub fn config_path() -> Result<PathBuf, Box<dyn Error>> {
    Ok(base_dir()?.join("config.toml"))
}

/// Load the scheduler configuration, falling back to defaults when no
/// config file has been written yet.
pub fn load_config() -> Result<SchedulerConfig, Box<dyn Error>> {
    let path = config_path()?;
    if path.exists() {
        Ok(SchedulerConfig::load_from_path(&path)?)
    } else {
        Ok(SchedulerConfig::default())
    }
}

/// In-memory copy of the tracked review states, loaded once per command.
pub struct StateStore {
    path: PathBuf,
    states: Vec<ReviewState>,
}

impl StateStore {
    /// Open the store at the default location, creating an empty one if
    /// no state file exists yet.
    pub fn open() -> Result<Self, Box<dyn Error>> {
        let path = base_dir()?.join("states.json");
        let states = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            Vec::new()
        };
        Ok(Self { path, states })
    }

    pub fn states(&self) -> &[ReviewState] {
        &self.states
    }

    pub fn get(&self, item_id: &str) -> Option<&ReviewState> {
        self.states.iter().find(|s| s.item_id == item_id)
    }

    /// Insert or replace the record for a state's item.
    pub fn upsert(&mut self, state: ReviewState) {
        match self.states.iter_mut().find(|s| s.item_id == state.item_id) {
            Some(existing) => *existing = state,
            None => self.states.push(state),
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.states)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
