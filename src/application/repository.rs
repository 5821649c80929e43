// src/application/repository.rs
use crate::application::{NoteCache, NoteService};
use crate::domain::{DomainError, Note};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Return all notes, preferring the local cache
    async fn get_notes(&self) -> Result<Vec<Note>, DomainError>;

    /// Persist the full list of notes remotely, then locally
    async fn save_notes(&self, notes: &[Note]) -> Result<(), DomainError>;
}

/// Repository that reads through the cache and writes through the service.
///
/// Reads: a non-empty cache is trusted as-is. An empty or failing cache falls
/// back to the service, whose result is written back into the cache on a
/// best-effort basis.
///
/// Writes: the service is written first and the cache only after the service
/// accepted the notes. The cache outcome is the result of the call.
pub struct CacheFirstRepository {
    service: Arc<dyn NoteService>,
    cache: Arc<dyn NoteCache>,
}

impl CacheFirstRepository {
    pub fn new(service: Arc<dyn NoteService>, cache: Arc<dyn NoteCache>) -> Self {
        Self { service, cache }
    }

    async fn load_from_service(&self) -> Result<Vec<Note>, DomainError> {
        let notes = self
            .service
            .get_notes()
            .await
            .map_err(DomainError::ServiceRead)?;
        debug!(count = notes.len(), "Fetched notes from service");

        // Repopulation failures never reach the caller
        if let Err(e) = self.cache.save_notes(&notes).await {
            let e = DomainError::CacheWrite(e);
            warn!(error = %e.describe(), "Failed to repopulate cache after service fetch");
        }

        Ok(notes)
    }
}

#[async_trait]
impl NoteRepository for CacheFirstRepository {
    #[instrument(level = "debug", skip(self))]
    async fn get_notes(&self) -> Result<Vec<Note>, DomainError> {
        match self.cache.get_notes().await {
            Ok(cached) if !cached.is_empty() => {
                debug!(count = cached.len(), "Serving notes from cache");
                Ok(cached)
            }
            Ok(_) => {
                debug!("Cache is empty, falling back to service");
                self.load_from_service().await
            }
            Err(e) => {
                let e = DomainError::CacheRead(e);
                debug!(error = %e.describe(), "Cache read failed, falling back to service");
                self.load_from_service().await
            }
        }
    }

    #[instrument(level = "debug", skip(self, notes), fields(count = notes.len()))]
    async fn save_notes(&self, notes: &[Note]) -> Result<(), DomainError> {
        self.service
            .save_data(notes)
            .await
            .map_err(DomainError::ServiceWrite)?;

        self.cache
            .save_notes(notes)
            .await
            .map_err(DomainError::CacheWrite)
    }
}
