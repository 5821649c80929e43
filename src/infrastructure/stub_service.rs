// src/infrastructure/stub_service.rs
use crate::application::NoteService;
use crate::domain::{Note, StoreError};
use async_trait::async_trait;
use tracing::debug;

/// Placeholder for the remote note service.
///
/// Reads return no notes and writes are accepted without being sent anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubService;

impl StubService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NoteService for StubService {
    async fn get_notes(&self) -> Result<Vec<Note>, StoreError> {
        debug!("Stub service returns no notes");
        Ok(vec![])
    }

    async fn save_data(&self, notes: &[Note]) -> Result<(), StoreError> {
        debug!(count = notes.len(), "Stub service accepts notes");
        Ok(())
    }
}
