//! notesvc: persisted text notes behind a small storage abstraction.
#[macro_use]
extern crate tracing;

pub mod errors;
pub mod note;
pub mod notestore;

pub use note::{Note, NoteID};
pub use notestore::{
    BoxedNoteStore, InMemoryStore, NoteStore, PostgreSQLStore, PostgreSQLStoreBuilder,
};
