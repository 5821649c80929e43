// src/ports/mod.rs
pub mod presenter;
pub mod terminal;
pub mod view_model;

pub use presenter::{NotePresenter, NoteView};
pub use terminal::{OutputFormat, TerminalView};
pub use view_model::NoteViewModel;
