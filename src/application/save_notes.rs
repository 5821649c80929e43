// src/application/save_notes.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait SaveNotesUseCase: Send + Sync {
    async fn execute(&self, notes: &[Note]) -> Result<(), DomainError>;
}

pub struct SaveNotes<R: NoteRepository> {
    repository: Arc<R>,
}

impl<R: NoteRepository> SaveNotes<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: NoteRepository> SaveNotesUseCase for SaveNotes<R> {
    async fn execute(&self, notes: &[Note]) -> Result<(), DomainError> {
        self.repository.save_notes(notes).await
    }
}
