// src/infrastructure/mod.rs
pub mod config;
pub mod json_cache;
pub mod record;
pub mod sqlite_cache;
pub mod stub_service;

pub use config::{CacheBackend, Config};
pub use json_cache::JsonFileCache;
pub use record::NoteRecord;
pub use sqlite_cache::SqliteCache;
pub use stub_service::StubService;

use crate::application::NoteCache;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Open the cache implementation selected by `backend` at `path`
pub fn open_cache(backend: CacheBackend, path: &Path) -> Result<Arc<dyn NoteCache>> {
    Ok(match backend {
        CacheBackend::Sqlite => Arc::new(SqliteCache::open(path)?),
        CacheBackend::Json => Arc::new(JsonFileCache::new(path)),
    })
}
