use anyhow::{Context, Result};
use chrono::{TimeZone, Utc};
use notekeeper::domain::Note;
use notekeeper::infrastructure::{JsonFileCache, SqliteCache};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with temporary cache files
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub sqlite_path: PathBuf,
    pub json_path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()
            .context("Failed to create temporary directory")?;

        let sqlite_path = temp_dir.path().join("notes.sqlite3");
        let json_path = temp_dir.path().join("notes.json");

        Ok(Self {
            _temp_dir: temp_dir,
            sqlite_path,
            json_path,
        })
    }

    pub fn open_sqlite(&self) -> Result<SqliteCache> {
        SqliteCache::open(&self.sqlite_path)
    }

    pub fn open_json(&self) -> JsonFileCache {
        JsonFileCache::new(&self.json_path)
    }
}

/// Sample notes with fixed due dates
#[allow(dead_code)]
pub fn sample_notes() -> Vec<Note> {
    vec![
        Note::new(
            "Buy milk",
            false,
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            None,
        ),
        Note::new(
            "Pay rent",
            true,
            Utc.with_ymd_and_hms(2024, 3, 5, 18, 0, 0).unwrap(),
            Some("transfer before noon".to_string()),
        ),
    ]
}
