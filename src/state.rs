use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::STATE_KEY_USER_ID;
use crate::identity::UserId;

/// Key-value persistence for the handful of values the client remembers
/// between runs.
///
/// Stored as `KEY=VALUE` lines. In practice only the user identifier is
/// written; everything else the client knows lives in memory.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load a single value by key. Missing file or key yields `None`.
    pub fn load_value(&self, key: &str) -> Option<String> {
        self.load_all().remove(key)
    }

    /// Save a single key-value pair, preserving the other entries.
    pub fn save_value(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.load_all();
        state.insert(key.to_string(), value.trim().to_string());
        self.save_all(&state)
    }

    pub fn load_all(&self) -> BTreeMap<String, String> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        contents
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .filter(|(k, _)| !k.is_empty())
            .collect()
    }

    /// Write every entry, sorted by key.
    pub fn save_all(&self, state: &BTreeMap<String, String>) -> Result<()> {
        let content: String = state.iter().map(|(k, v)| format!("{k}={v}\n")).collect();
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write state file {}", self.path.display()))
    }

    /// The persisted user identifier, if any, as the text that was stored
    pub fn load_user_id(&self) -> Option<UserId> {
        self.load_value(STATE_KEY_USER_ID)
            .filter(|v| !v.is_empty())
            .map(UserId::Text)
    }

    pub fn save_user_id(&self, user_id: &UserId) -> Result<()> {
        self.save_value(STATE_KEY_USER_ID, &user_id.to_string())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
