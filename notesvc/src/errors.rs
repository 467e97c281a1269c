use thiserror::Error;

use crate::NoteID;

#[derive(Error, Debug)]
pub enum NoteStoreError {
    #[error("note `{0}` doesn't exist")]
    NoteNotExist(NoteID),
    /// A delete touched a number of rows other than one.
    ///
    /// IDs are unique, so anything but exactly one row means the note was missing or the
    /// table is in an unexpected state.
    #[error("{0} entries deleted")]
    UnexpectedDeleteCount(u64),
    #[error("{0} entries updated")]
    UnexpectedUpdateCount(u64),
    #[error("invalid pagination: size `{size}`, page `{page}`")]
    InvalidPagination { size: i64, page: i64 },
    #[error("PostgreSQL error: {0}")]
    PostgreSQLError(#[from] sqlx::Error),
}
