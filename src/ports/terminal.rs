// src/ports/terminal.rs
use crate::ports::{NoteView, NoteViewModel};
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Line-oriented view that renders notes to a writer.
///
/// Keeps the last displayed list so new notes can be appended to it before
/// the whole list is saved.
pub struct TerminalView<W: Write + Send> {
    out: Mutex<W>,
    format: OutputFormat,
    notes: Mutex<Vec<NoteViewModel>>,
    last_error: Mutex<Option<String>>,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out: Mutex::new(out),
            format,
            notes: Mutex::new(vec![]),
            last_error: Mutex::new(None),
        }
    }

    pub fn notes(&self) -> Vec<NoteViewModel> {
        lock(&self.notes).clone()
    }

    pub fn last_error(&self) -> Option<String> {
        lock(&self.last_error).clone()
    }

    /// Append a note to the displayed list and return the full list to save
    pub fn add_note(&self, note: NoteViewModel) -> Vec<NoteViewModel> {
        let mut notes = lock(&self.notes);
        notes.push(note);
        notes.clone()
    }

    pub fn into_output(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn render(&self, notes: &[NoteViewModel]) -> std::io::Result<()> {
        let mut out = lock(&self.out);
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, notes)?;
                writeln!(out)?;
            }
            OutputFormat::Text => {
                for note in notes {
                    writeln!(out, "{}", format_line(note))?;
                }
            }
        }
        out.flush()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// `<id>  [x] <title>  due <date>  <body>`
pub fn format_line(note: &NoteViewModel) -> String {
    let check = if note.is_complete { "[x]" } else { "[ ]" };
    let due = note.due_date.format("%Y-%m-%d %H:%M");
    match note.notes.as_deref().filter(|body| !body.is_empty()) {
        Some(body) => format!("{}  {} {}  due {}  {}", note.id, check, note.title, due, body),
        None => format!("{}  {} {}  due {}", note.id, check, note.title, due),
    }
}

impl<W: Write + Send> NoteView for TerminalView<W> {
    fn display_notes(&self, notes: Vec<NoteViewModel>) {
        if let Err(e) = self.render(&notes) {
            warn!(error = %e, "Failed to render notes");
        }
        *lock(&self.notes) = notes;
    }

    fn show_error(&self, message: &str) {
        if let Err(e) = writeln!(lock(&self.out), "error: {}", message) {
            warn!(error = %e, "Failed to render error");
        }
        *lock(&self.last_error) = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn view_model(title: &str, is_complete: bool, notes: Option<&str>) -> NoteViewModel {
        NoteViewModel {
            id: Uuid::nil(),
            title: title.to_string(),
            is_complete,
            due_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn given_complete_note_with_body_when_formatting_then_shows_all_parts() {
        let line = format_line(&view_model("Buy milk", true, Some("whole")));

        assert_eq!(
            line,
            "00000000-0000-0000-0000-000000000000  [x] Buy milk  due 2024-03-01 09:30  whole"
        );
    }

    #[test]
    fn given_empty_body_when_formatting_then_omits_body() {
        let line = format_line(&view_model("Call mom", false, Some("")));

        assert!(line.ends_with("[ ] Call mom  due 2024-03-01 09:30"));
    }

    #[test]
    fn given_notes_when_displaying_as_text_then_writes_one_line_each_and_keeps_list() {
        // Arrange
        let view = TerminalView::new(Vec::new(), OutputFormat::Text);
        let notes = vec![view_model("one", false, None), view_model("two", true, None)];

        // Act
        view.display_notes(notes.clone());

        // Assert
        assert_eq!(view.notes(), notes);
        let output = String::from_utf8(view.into_output()).unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("[x] two"));
    }

    #[test]
    fn given_notes_when_displaying_as_json_then_writes_array() {
        let view = TerminalView::new(Vec::new(), OutputFormat::Json);

        view.display_notes(vec![view_model("one", false, None)]);

        let output = String::from_utf8(view.into_output()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["title"], "one");
    }

    #[test]
    fn given_error_when_showing_then_writes_and_remembers_message() {
        let view = TerminalView::new(Vec::new(), OutputFormat::Text);

        view.show_error("offline");

        assert_eq!(view.last_error().as_deref(), Some("offline"));
        assert_eq!(String::from_utf8(view.into_output()).unwrap(), "error: offline\n");
    }

    #[test]
    fn given_displayed_notes_when_adding_then_returns_full_list() {
        let view = TerminalView::new(Vec::new(), OutputFormat::Text);
        view.display_notes(vec![view_model("existing", false, None)]);

        let all = view.add_note(view_model("new", false, None));

        assert_eq!(all.len(), 2);
        assert_eq!(all[1].title, "new");
        assert_eq!(view.notes(), all);
    }
}
