// src/infrastructure/sqlite_cache.rs
use crate::application::NoteCache;
use crate::domain::{Note, StoreError};
use crate::infrastructure::record::NoteRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS notes (
        row_id      INTEGER PRIMARY KEY AUTOINCREMENT,
        id          TEXT,
        title       TEXT,
        is_complete INTEGER NOT NULL DEFAULT 0,
        due_date    TEXT,
        notes       TEXT
    );
";

/// Note cache backed by a SQLite database.
///
/// Every save inserts new rows; existing rows with the same note id are kept.
/// Statements run on tokio's blocking pool, one at a time.
pub struct SqliteCache {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCache {
    /// Wrap an already opened connection, creating the schema if needed
    pub fn new(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(?path, "Opening SQLite cache");

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create cache directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open cache database {}", path.display()))?;
        let cache = Self::new(conn).context("Failed to initialize cache schema")?;

        info!(?path, "Opened SQLite cache");
        Ok(cache)
    }

    pub fn in_memory() -> Result<Self, StoreError> {
        Self::new(Connection::open_in_memory()?)
    }

    async fn with_connection<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut conn = conn.lock().map_err(|_| {
                StoreError::Unavailable("cache connection lock poisoned".to_string())
            })?;
            f(&mut conn)
        })
        .await?
    }
}

#[async_trait]
impl NoteCache for SqliteCache {
    #[instrument(level = "debug", skip(self))]
    async fn get_notes(&self) -> Result<Vec<Note>, StoreError> {
        let records = self
            .with_connection(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, title, is_complete, due_date, notes FROM notes ORDER BY row_id",
                )?;
                let records = stmt
                    .query_map([], |row| {
                        Ok(NoteRecord {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            is_complete: row.get(2)?,
                            due_date: row.get(3)?,
                            notes: row.get(4)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(records)
            })
            .await?;

        debug!(count = records.len(), "Loaded note records");
        Ok(records.into_iter().map(Note::from).collect())
    }

    #[instrument(level = "debug", skip(self, notes), fields(count = notes.len()))]
    async fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError> {
        let records: Vec<NoteRecord> = notes.iter().map(NoteRecord::from).collect();

        self.with_connection(move |conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO notes (id, title, is_complete, due_date, notes)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )?;
                for record in &records {
                    stmt.execute(params![
                        record.id,
                        record.title,
                        record.is_complete,
                        record.due_date,
                        record.notes
                    ])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await?;

        debug!("Saved note records");
        Ok(())
    }
}
