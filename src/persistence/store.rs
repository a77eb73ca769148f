use super::files::{atomic_write, ensure_data_dir, read_file};
use crate::domain::{Task, Theme};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Store keys, one file per key in the data directory
pub const THEME_KEY: &str = "theme";
pub const TASKS_KEY: &str = "tasks.json";
pub const SESSIONS_KEY: &str = "sessions";

/// File-backed key-value store for everything that survives a restart:
/// theme preference, the task list, and the completed-session counter.
///
/// Reads are tolerant: an absent or malformed key degrades to its default
/// (dark theme, empty list, zero sessions) instead of failing.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open the store in the resolved data directory, creating it if needed
    pub fn open() -> Result<Self> {
        Ok(Self {
            dir: ensure_data_dir()?,
        })
    }

    /// Open a store rooted at an explicit directory (used by tests)
    pub fn at<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Load the theme preference; anything but "light"/"dark" means dark
    pub fn load_theme(&self) -> Theme {
        read_file(self.key_path(THEME_KEY))
            .ok()
            .and_then(|content| content.trim().parse().ok())
            .unwrap_or_default()
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        atomic_write(self.key_path(THEME_KEY), theme.as_key())
    }

    /// Load the persisted task list; absent or malformed means empty
    pub fn load_tasks(&self) -> Vec<Task> {
        read_file(self.key_path(TASKS_KEY))
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        atomic_write(self.key_path(TASKS_KEY), &json)
    }

    /// Load the completed-session counter; absent or malformed means zero
    pub fn load_sessions(&self) -> u64 {
        read_file(self.key_path(SESSIONS_KEY))
            .ok()
            .and_then(|content| content.trim().parse().ok())
            .unwrap_or(0)
    }

    pub fn save_sessions(&self, sessions: u64) -> Result<()> {
        atomic_write(self.key_path(SESSIONS_KEY), &sessions.to_string())
    }
}
