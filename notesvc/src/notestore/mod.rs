//! Storage backends of notes.
use crate::errors::NoteStoreError;
use crate::note::*;
use futures::future::BoxFuture;

mod in_memory;
mod postgresql;

#[cfg(test)]
mod tests;

pub use in_memory::InMemoryStore;
pub use postgresql::{PostgreSQLStore, PostgreSQLStoreBuilder};

pub type BoxedNoteStore = Box<dyn NoteStore + Send + Sync>;

/// An abstraction for storage backends.
pub trait NoteStore {
    /// Get a page of notes, ordered by ascending [`NoteID`].
    ///
    /// At most `size` notes are returned, skipping the first `page * size` notes.
    /// Running past the end of the store gives an empty list rather than an error.
    fn read_note_list(
        &self,
        size: i64,
        page: i64,
    ) -> BoxFuture<'_, Result<Vec<Note>, NoteStoreError>>;
    /// Get a note by its ID.
    fn read_note(&self, id: NoteID) -> BoxFuture<'_, Result<Note, NoteStoreError>>;
    /// Persist a new note.
    ///
    /// The storage backend assigns the [`NoteID`]; whatever ID the caller put in `note` is
    /// ignored.
    fn add_note(&self, note: Note) -> BoxFuture<'_, Result<NoteID, NoteStoreError>>;
    /// Delete a note.
    ///
    /// Exactly one note must be deleted, otherwise an error is returned.
    fn remove_note(&self, id: NoteID) -> BoxFuture<'_, Result<(), NoteStoreError>>;
    /// Replace the title and content of the note with the ID `note.id`.
    ///
    /// Exactly one note must be updated, otherwise an error is returned.
    fn update_note(&self, note: Note) -> BoxFuture<'_, Result<(), NoteStoreError>>;
    /// Release the resources held by the store.
    ///
    /// The store should not be used after it has been closed.
    fn close(&self) -> BoxFuture<'_, Result<(), NoteStoreError>>;
}

/// Number of notes to skip for a page of `size` notes.
pub(crate) fn page_offset(size: i64, page: i64) -> Result<i64, NoteStoreError> {
    if size < 0 || page < 0 {
        return Err(NoteStoreError::InvalidPagination { size, page });
    }
    page.checked_mul(size)
        .ok_or(NoteStoreError::InvalidPagination { size, page })
}
