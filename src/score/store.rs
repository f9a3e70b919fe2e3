//! High-score persistence
//!
//! The record is a (player name, best score) pair stored as JSON. Loading
//! is total: a missing, unreadable or corrupt file degrades to the default
//! record instead of surfacing an error to the player.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The persisted best result and who holds it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    /// Player name entered on the game-over screen
    pub name: String,
    /// Best score achieved so far
    pub best: u32,
}

impl HighScoreRecord {
    /// Whether `score` would displace this record
    ///
    /// Strictly greater: matching the record does not rewrite it.
    pub fn is_beaten_by(&self, score: u32) -> bool {
        score > self.best
    }

    /// Take over the record if `score` beats it
    ///
    /// Returns true when the record changed and should be persisted.
    pub fn record(&mut self, name: &str, score: u32) -> bool {
        if !self.is_beaten_by(score) {
            return false;
        }

        self.name = name.to_string();
        self.best = score;
        true
    }
}

/// File-backed store for the high-score record
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Create a store persisting to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted record, or the default when none is usable
    pub fn load(&self) -> HighScoreRecord {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => HighScoreRecord::default(),
        }
    }

    /// Persist the record as pretty-printed JSON
    ///
    /// Creates parent directories if they don't exist, so a subsequent
    /// `load` in a future process returns exactly this record.
    pub fn save(&self, record: &HighScoreRecord) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json =
            serde_json::to_string_pretty(record).context("Failed to serialize high score")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_record_updates_only_on_improvement() {
        let mut record = HighScoreRecord::default();

        assert!(record.record("Ada", 5));
        assert_eq!(record.name, "Ada");
        assert_eq!(record.best, 5);

        // Lower score leaves the record alone
        assert!(!record.record("Bob", 4));
        assert_eq!(record.name, "Ada");
        assert_eq!(record.best, 5);

        // Ties do not displace the holder either
        assert!(!record.record("Cyd", 5));
        assert_eq!(record.name, "Ada");

        assert!(record.record("Dee", 6));
        assert_eq!(record.name, "Dee");
        assert_eq!(record.best, 6);
    }

    #[test]
    fn test_lower_score_never_displaces_record() {
        let mut record = HighScoreRecord {
            name: "Ada".to_string(),
            best: 10,
        };

        assert!(!record.record("Bob", 4));
        assert_eq!(record.name, "Ada");
        assert_eq!(record.best, 10);
    }

    #[test]
    fn test_is_beaten_by() {
        let record = HighScoreRecord {
            name: "Ada".to_string(),
            best: 3,
        };

        assert!(record.is_beaten_by(4));
        assert!(!record.is_beaten_by(3));
        assert!(!record.is_beaten_by(0));
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScoreStore::new(temp_dir.path().join("scores.json"));

        let mut record = HighScoreRecord {
            name: "Ann".to_string(),
            best: 3,
        };
        store.save(&record).unwrap();

        assert!(record.record("Ada", 5));
        store.save(&record).unwrap();

        // A fresh store on the same path sees the new record
        let reloaded = ScoreStore::new(store.path()).load();
        assert_eq!(reloaded.name, "Ada");
        assert_eq!(reloaded.best, 5);
    }

    #[test]
    fn test_name_round_trips_exactly() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScoreStore::new(temp_dir.path().join("scores.json"));

        let record = HighScoreRecord {
            name: "Ada Lovelace, Esq.".to_string(),
            best: 42,
        };
        store.save(&record).unwrap();

        assert_eq!(store.load(), record);
    }

    #[test]
    fn test_missing_file_loads_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScoreStore::new(temp_dir.path().join("nothing_here.json"));

        assert_eq!(store.load(), HighScoreRecord::default());
    }

    #[test]
    fn test_corrupt_file_loads_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.json");

        std::fs::write(&path, "definitely { not json").unwrap();
        assert_eq!(ScoreStore::new(&path).load(), HighScoreRecord::default());

        // Valid JSON of the wrong shape counts as corrupt too
        std::fs::write(&path, r#"{"name": 17}"#).unwrap();
        assert_eq!(ScoreStore::new(&path).load(), HighScoreRecord::default());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deep").join("er").join("scores.json");
        let store = ScoreStore::new(&path);

        let record = HighScoreRecord {
            name: "Ada".to_string(),
            best: 5,
        };
        store.save(&record).unwrap();

        assert_eq!(store.load(), record);
    }
}
