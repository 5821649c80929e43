// src/application/get_notes.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait GetNotesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Note>, DomainError>;
}

pub struct GetNotes<R: NoteRepository> {
    repository: Arc<R>,
}

impl<R: NoteRepository> GetNotes<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: NoteRepository> GetNotesUseCase for GetNotes<R> {
    async fn execute(&self) -> Result<Vec<Note>, DomainError> {
        self.repository.get_notes().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CacheFirstRepository;
    use crate::util::testing::{MockNoteCache, MockNoteService};
    use chrono::Utc;

    #[tokio::test]
    async fn given_repository_with_notes_when_executing_then_returns_them() {
        // Arrange
        let notes = vec![Note::new("First", false, Utc::now(), None)];
        let repo = CacheFirstRepository::new(
            Arc::new(MockNoteService::builder().build()),
            Arc::new(MockNoteCache::builder().with_notes(notes.clone()).build()),
        );
        let use_case = GetNotes::new(Arc::new(repo));

        // Act
        let result = use_case.execute().await.expect("Get should succeed");

        // Assert
        assert_eq!(result, notes);
    }
}
