// src/infrastructure/json_cache.rs
use crate::application::NoteCache;
use crate::domain::{Note, StoreError};
use crate::infrastructure::record::NoteRecord;
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Note cache kept as a JSON array of records in a single file.
///
/// A missing or blank file reads as an empty cache. Saves append records and
/// replace the file atomically. File access runs on tokio's blocking pool.
#[derive(Debug)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

fn read_records(path: &Path) -> Result<Vec<NoteRecord>, StoreError> {
    if !path.exists() {
        return Ok(vec![]);
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(vec![]);
    }
    Ok(serde_json::from_str(&content)?)
}

fn write_records(path: &Path, records: &[NoteRecord]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut file, records)?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl NoteCache for JsonFileCache {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    async fn get_notes(&self) -> Result<Vec<Note>, StoreError> {
        let path = self.path.clone();
        let records = tokio::task::spawn_blocking(move || read_records(&path)).await??;
        debug!(count = records.len(), "Loaded note records");
        Ok(records.into_iter().map(Note::from).collect())
    }

    #[instrument(level = "debug", skip(self, notes), fields(path = %self.path.display(), count = notes.len()))]
    async fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError> {
        let path = self.path.clone();
        let added: Vec<NoteRecord> = notes.iter().map(NoteRecord::from).collect();

        tokio::task::spawn_blocking(move || {
            let mut records = read_records(&path)?;
            records.extend(added);
            write_records(&path, &records)
        })
        .await?
    }
}
