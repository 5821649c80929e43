// src/ports/view_model.rs
use crate::domain::Note;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// View-facing projection of a note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteViewModel {
    pub id: Uuid,
    pub title: String,
    pub is_complete: bool,
    pub due_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl From<&Note> for NoteViewModel {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id(),
            title: note.title.clone(),
            is_complete: note.is_complete,
            due_date: note.due_date,
            notes: note.notes.clone(),
        }
    }
}

impl From<NoteViewModel> for Note {
    fn from(vm: NoteViewModel) -> Self {
        Note::with_id(vm.id, vm.title, vm.is_complete, vm.due_date, vm.notes)
    }
}
