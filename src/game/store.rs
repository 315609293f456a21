//! Saving the day's session between runs
//!
//! A snapshot holds the day it was written, the day's puzzle and the guesses
//! played so far. It is stored as JSON with [`serde_json`].

use crate::core::Word;
use crate::puzzle::DailyPuzzle;
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ffi::OsString;
use std::fs::{File, remove_file, rename};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File name used when only a directory is given
pub const SAVE_FILE_NAME: &str = "word_chains.json";

/// Persisted state of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Day the session was last played
    pub last_played: NaiveDate,
    pub puzzle: DailyPuzzle,
    /// Accepted guesses, the start word first
    pub guesses: Vec<Word>,
}

/// Error reading or writing a snapshot
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Cannot access the save file: {e}"),
            Self::Format(e) => write!(f, "Save file is not valid: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e)
    }
}

/// Somewhere a single snapshot can be kept
pub trait SessionStore {
    /// Load the saved snapshot, `None` if nothing was saved yet
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the saved data cannot be read or decoded.
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError>;

    /// Replace the saved snapshot
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the snapshot cannot be written.
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;
}

/// Snapshot kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!("Save file: {}", path.display());
        Self { path }
    }

    /// Store named [`SAVE_FILE_NAME`] inside `dir`
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SAVE_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file a snapshot is written to before it replaces the save file
    #[must_use]
    pub fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_staged(&self, staging: &Path, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let mut writer = BufWriter::new(File::create(staging)?);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);
        rename(staging, &self.path)?;
        Ok(())
    }

    /// Remove the save file, ignoring a missing one
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if an existing file cannot be removed.
    pub fn delete(&self) -> Result<(), StoreError> {
        match remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let snapshot: SessionSnapshot = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(snapshot))
    }

    // The save file is replaced whole, never truncated in place
    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        let staging = self.staging_path();
        let result = self.write_staged(&staging, snapshot);
        if result.is_err() {
            let _ = remove_file(&staging);
        }
        result
    }
}

/// Snapshot kept in memory, for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<SessionSnapshot>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            snapshot: None,
            saves: 0,
        }
    }

    /// Store that already holds `snapshot`
    #[must_use]
    pub const fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    #[must_use]
    pub const fn snapshot(&self) -> Option<&SessionSnapshot> {
        self.snapshot.as_ref()
    }

    /// Number of times `save` was called
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn sample() -> SessionSnapshot {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        SessionSnapshot {
            last_played: date,
            puzzle: DailyPuzzle::new(date, word("cat"), word("cog"), 2),
            guesses: vec![word("cat"), word("cot")],
        }
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("word_chains_{}_{name}.json", std::process::id()))
    }

    #[test]
    fn memory_store_keeps_last_snapshot() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn json_store_missing_file_is_empty() {
        let store = JsonFileStore::new(scratch_path("missing"));
        store.delete().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn json_store_save_then_load() {
        let mut store = JsonFileStore::new(scratch_path("save_load"));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
        store.delete().unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn json_store_replaces_previous_file_whole() {
        let path = scratch_path("replace");
        std::fs::write(&path, "{ half written").unwrap();
        let mut store = JsonFileStore::new(&path);

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
        assert!(!store.staging_path().exists());
        store.delete().unwrap();
    }

    #[test]
    fn json_store_failed_save_keeps_previous_file() {
        let dir = std::env::temp_dir().join(format!("word_chains_{}_blocked", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let mut store = JsonFileStore::in_dir(&dir);
        store.save(&sample()).unwrap();

        // A directory in the staging spot makes the next write fail
        std::fs::create_dir_all(store.staging_path()).unwrap();
        let mut changed = sample();
        changed.guesses.truncate(1);
        assert!(matches!(store.save(&changed), Err(StoreError::Io(_))));
        assert_eq!(store.load().unwrap(), Some(sample()));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn json_store_rejects_garbage() {
        let path = scratch_path("garbage");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Format(_))));
        store.delete().unwrap();
    }

    #[test]
    fn json_store_rejects_invalid_words() {
        let path = scratch_path("bad_word");
        std::fs::write(
            &path,
            r#"{"last_played":"2024-03-07","puzzle":{"date":"2024-03-07","start":"c4t","target":"cog","min_moves":2},"guesses":["c4t"]}"#,
        )
        .unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Format(_))));
        store.delete().unwrap();
    }

    #[test]
    fn snapshot_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["last_played"], "2024-03-07");
        assert_eq!(json["guesses"], serde_json::json!(["cat", "cot"]));
        assert_eq!(json["puzzle"]["target"], "cog");
    }

    #[test]
    fn in_dir_uses_default_name() {
        let store = JsonFileStore::in_dir("/tmp");
        assert_eq!(store.path(), Path::new("/tmp/word_chains.json"));
    }
}
