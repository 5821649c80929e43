// src/ports/presenter.rs
use crate::application::{GetNotesUseCase, SaveNotesUseCase};
use crate::domain::{DomainError, Note};
use crate::ports::NoteViewModel;
use std::sync::Weak;
use tracing::{debug, error, info, instrument};

/// What the presenter pushes results into
pub trait NoteView: Send + Sync {
    fn display_notes(&self, notes: Vec<NoteViewModel>);
    fn show_error(&self, message: &str);
}

/// Drives the note use cases on behalf of a view.
///
/// The view is held weakly; once it is dropped, results are discarded.
pub struct NotePresenter<G: GetNotesUseCase, S: SaveNotesUseCase> {
    view: Weak<dyn NoteView>,
    get_notes: G,
    save_notes: S,
}

impl<G: GetNotesUseCase, S: SaveNotesUseCase> NotePresenter<G, S> {
    pub fn new(view: Weak<dyn NoteView>, get_notes: G, save_notes: S) -> Self {
        Self {
            view,
            get_notes,
            save_notes,
        }
    }

    /// Load notes and hand them, or the error message, to the view
    #[instrument(level = "debug", skip(self))]
    pub async fn view_did_load(&self) {
        let result = self.get_notes.execute().await;

        let Some(view) = self.view.upgrade() else {
            debug!("View released before notes were loaded");
            return;
        };

        match result {
            Ok(notes) => {
                let view_models = notes.iter().map(NoteViewModel::from).collect();
                view.display_notes(view_models);
            }
            Err(e) => view.show_error(&e.describe()),
        }
    }

    /// Save the full list shown by the view.
    ///
    /// The outcome is logged and returned; the view is not updated.
    #[instrument(level = "debug", skip(self, notes), fields(count = notes.len()))]
    pub async fn save_notes(&self, notes: Vec<NoteViewModel>) -> Result<(), DomainError> {
        let notes: Vec<Note> = notes.into_iter().map(Note::from).collect();

        match self.save_notes.execute(&notes).await {
            Ok(()) => {
                info!(count = notes.len(), "Notes saved");
                Ok(())
            }
            Err(e) => {
                error!(error = %e.describe(), "Failed to save notes");
                Err(e)
            }
        }
    }
}
