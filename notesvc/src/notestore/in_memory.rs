//! In-memory storage of notes
use crate::errors::NoteStoreError;
use crate::notestore::page_offset;
use crate::{Note, NoteID, NoteStore};
use futures::future::BoxFuture;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct InMemoryNotes {
    notes: BTreeMap<NoteID, Note>,
    last_id: i64,
}

/// A note store that keeps everything in a [`BTreeMap`].
///
/// IDs start from one and are never reused, like a database sequence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<InMemoryNotes>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Default::default()
    }
}

impl NoteStore for InMemoryStore {
    fn read_note_list(
        &self,
        size: i64,
        page: i64,
    ) -> BoxFuture<'_, Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move {
            let offset = page_offset(size, page)?;
            let inner = self.inner.read().await;
            // Both are non-negative at this point.
            Ok(inner
                .notes
                .values()
                .skip(offset as usize)
                .take(size as usize)
                .cloned()
                .collect())
        })
    }

    fn read_note(&self, id: NoteID) -> BoxFuture<'_, Result<Note, NoteStoreError>> {
        Box::pin(async move {
            let inner = self.inner.read().await;
            inner
                .notes
                .get(&id)
                .cloned()
                .ok_or(NoteStoreError::NoteNotExist(id))
        })
    }

    fn add_note(&self, note: Note) -> BoxFuture<'_, Result<NoteID, NoteStoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            inner.last_id += 1;
            let id = NoteID::new(inner.last_id);
            inner.notes.insert(id, note.with_id(id));
            Ok(id)
        })
    }

    fn remove_note(&self, id: NoteID) -> BoxFuture<'_, Result<(), NoteStoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            match inner.notes.remove(&id) {
                Some(_) => Ok(()),
                None => Err(NoteStoreError::UnexpectedDeleteCount(0)),
            }
        })
    }

    fn update_note(&self, note: Note) -> BoxFuture<'_, Result<(), NoteStoreError>> {
        Box::pin(async move {
            let mut inner = self.inner.write().await;
            match inner.notes.get_mut(&note.id) {
                Some(stored) => {
                    stored.title = note.title;
                    stored.content = note.content;
                    Ok(())
                }
                None => Err(NoteStoreError::UnexpectedUpdateCount(0)),
            }
        })
    }

    fn close(&self) -> BoxFuture<'_, Result<(), NoteStoreError>> {
        Box::pin(async move { Ok(()) })
    }
}
