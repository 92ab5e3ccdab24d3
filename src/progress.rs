//! Per-term progress persistence.
//!
//! The simulation emits attempt events; this module merges them into a
//! per-term history of attempts/correct counts plus the latest typing speed,
//! stored as JSON in the platform data directory. Saves are atomic
//! (temp file + rename) and a missing or corrupt file loads as empty.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::types::{AttemptEvent, Outcome};

/// History for one term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermProgress {
    pub attempts: u32,
    pub correct: u32,
    /// Words-per-minute at the time of the last correct attempt
    pub wpm: f32,
}

/// The whole progress file, keyed by term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressStore {
    pub terms: BTreeMap<String, TermProgress>,
}

impl ProgressStore {
    /// Merge one attempt event. `wpm` is the session's running typing speed,
    /// recorded only on hits.
    pub fn record(&mut self, event: &AttemptEvent, wpm: f32) {
        let entry = self.terms.entry(event.term.clone()).or_default();
        entry.attempts += 1;
        if event.outcome == Outcome::Hit {
            entry.correct += 1;
            entry.wpm = wpm;
        }
    }

    pub fn get(&self, term: &str) -> Option<&TermProgress> {
        self.terms.get(term)
    }

    /// Load from disk; missing or unreadable data starts fresh.
    pub fn load_or_default(path: &Path) -> Self {
        if let Ok(s) = fs::read_to_string(path) {
            if let Ok(store) = serde_json::from_str::<ProgressStore>(&s) {
                return store;
            }
        }
        Self::default()
    }

    /// Atomic save: write a sibling temp file, then rename over the target.
    pub fn save_atomic(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let tmp = path.with_extension("json.tmp");
        let data = serde_json::to_vec_pretty(self)?;
        fs::write(&tmp, data)
            .with_context(|| format!("failed to write {}", tmp.display()))?;
        if path.exists() {
            let _ = fs::remove_file(path);
        }
        fs::rename(&tmp, path)
            .with_context(|| format!("failed to replace {}", path.display()))?;
        Ok(())
    }
}

/// Default location of the progress file.
pub fn default_progress_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com", "tui-typer", "TuiTyper")
        .context("could not resolve project directories")?;
    Ok(proj.data_local_dir().join("progress.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(term: &str) -> AttemptEvent {
        AttemptEvent {
            term: term.to_string(),
            outcome: Outcome::Hit,
            elapsed_ms: 1000,
        }
    }

    fn miss(term: &str) -> AttemptEvent {
        AttemptEvent {
            term: term.to_string(),
            outcome: Outcome::Miss,
            elapsed_ms: 1000,
        }
    }

    #[test]
    fn test_record_merges_attempts() {
        let mut store = ProgressStore::default();
        store.record(&hit("word"), 12.0);
        store.record(&miss("word"), 0.0);
        store.record(&hit("word"), 15.0);

        let p = store.get("word").unwrap();
        assert_eq!(p.attempts, 3);
        assert_eq!(p.correct, 2);
        assert_eq!(p.wpm, 15.0);
    }

    #[test]
    fn test_miss_does_not_touch_wpm() {
        let mut store = ProgressStore::default();
        store.record(&hit("word"), 12.0);
        store.record(&miss("word"), 99.0);
        assert_eq!(store.get("word").unwrap().wpm, 12.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = ProgressStore::default();
        store.record(&hit("alpha"), 10.0);
        store.record(&miss("beta"), 0.0);

        let json = serde_json::to_string(&store).unwrap();
        let back: ProgressStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("tui-typer-test-{}", std::process::id()));
        let path = dir.join("progress.json");

        let mut store = ProgressStore::default();
        store.record(&hit("word"), 20.0);
        store.save_atomic(&path).unwrap();

        let loaded = ProgressStore::load_or_default(&path);
        assert_eq!(loaded, store);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_or_corrupt_file_loads_empty() {
        let missing = ProgressStore::load_or_default(Path::new("/nonexistent/progress.json"));
        assert!(missing.terms.is_empty());

        let dir = std::env::temp_dir().join(format!("tui-typer-corrupt-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("progress.json");
        fs::write(&path, "not json at all").unwrap();
        let corrupt = ProgressStore::load_or_default(&path);
        assert!(corrupt.terms.is_empty());
        let _ = fs::remove_dir_all(&dir);
    }
}
