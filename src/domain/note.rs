// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A note as the rest of the application sees it.
///
/// Identity is the `id` alone: two notes with the same id compare equal even
/// when their other fields differ. The id is assigned once, at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    id: Uuid,
    pub title: String,
    pub is_complete: bool,
    pub due_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Note {
    /// Create a note with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        is_complete: bool,
        due_date: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, is_complete, due_date, notes)
    }

    /// Rebuild a note whose id is already known (loaded from a store or a view)
    pub fn with_id(
        id: Uuid,
        title: impl Into<String>,
        is_complete: bool,
        due_date: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            is_complete,
            due_date,
            notes,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
