// src/infrastructure/record.rs
use crate::domain::Note;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted form of a note.
///
/// Every field except the completion flag may be missing in storage. Loading
/// never fails on a missing or unreadable field: it falls back to a new id,
/// an empty title, the current time, or an empty body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NoteRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
    /// RFC 3339 timestamp
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<&Note> for NoteRecord {
    fn from(note: &Note) -> Self {
        Self {
            id: Some(note.id().to_string()),
            title: Some(note.title.clone()),
            is_complete: note.is_complete,
            due_date: Some(note.due_date.to_rfc3339()),
            notes: note.notes.clone(),
        }
    }
}

impl From<NoteRecord> for Note {
    fn from(record: NoteRecord) -> Self {
        let id = record
            .id
            .as_deref()
            .and_then(|s| Uuid::parse_str(s).ok())
            .unwrap_or_else(Uuid::new_v4);
        let due_date = record
            .due_date
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|d| d.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        Note::with_id(
            id,
            record.title.unwrap_or_default(),
            record.is_complete,
            due_date,
            Some(record.notes.unwrap_or_default()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn given_complete_note_when_converting_to_record_and_back_then_fields_match() {
        // Arrange
        let due = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let note = Note::new("Buy milk", true, due, Some("whole".to_string()));

        // Act
        let restored = Note::from(NoteRecord::from(&note));

        // Assert
        assert_eq!(restored.id(), note.id());
        assert_eq!(restored.title, "Buy milk");
        assert!(restored.is_complete);
        assert_eq!(restored.due_date, due);
        assert_eq!(restored.notes.as_deref(), Some("whole"));
    }

    #[test]
    fn given_empty_record_when_loading_then_substitutes_defaults() {
        let before = Utc::now();

        let note = Note::from(NoteRecord::default());

        assert_eq!(note.title, "");
        assert!(!note.is_complete);
        assert!(note.due_date >= before);
        assert_eq!(note.notes.as_deref(), Some(""));
    }

    #[test]
    fn given_unparseable_id_and_date_when_loading_then_substitutes_defaults() {
        let record = NoteRecord {
            id: Some("not-a-uuid".to_string()),
            title: Some("kept".to_string()),
            is_complete: false,
            due_date: Some("yesterday".to_string()),
            notes: None,
        };
        let before = Utc::now();

        let note = Note::from(record);

        assert_eq!(note.title, "kept");
        assert!(note.due_date >= before);
    }

    #[test]
    fn given_json_without_optional_fields_when_deserializing_then_uses_serde_defaults() {
        let record: NoteRecord =
            serde_json::from_str(r#"{"title":"only title"}"#).expect("Should deserialize");

        assert_eq!(record.title.as_deref(), Some("only title"));
        assert_eq!(record.id, None);
        assert!(!record.is_complete);
    }
}
