// src/application/store.rs
use crate::domain::{Note, StoreError};
use async_trait::async_trait;

/// Local, non-authoritative persistence for notes.
///
/// `save_notes` inserts every note as a new record. Implementations give no
/// upsert-by-id guarantee.
#[async_trait]
pub trait NoteCache: Send + Sync {
    async fn get_notes(&self) -> Result<Vec<Note>, StoreError>;

    async fn save_notes(&self, notes: &[Note]) -> Result<(), StoreError>;
}

/// Authoritative remote persistence for notes.
#[async_trait]
pub trait NoteService: Send + Sync {
    async fn get_notes(&self) -> Result<Vec<Note>, StoreError>;

    async fn save_data(&self, notes: &[Note]) -> Result<(), StoreError>;
}
