// src/application/mod.rs
pub mod get_notes;
pub mod repository;
pub mod save_notes;
pub mod store;

pub use get_notes::{GetNotes, GetNotesUseCase};
pub use repository::{CacheFirstRepository, NoteRepository};
pub use save_notes::{SaveNotes, SaveNotesUseCase};
pub use store::{NoteCache, NoteService};
