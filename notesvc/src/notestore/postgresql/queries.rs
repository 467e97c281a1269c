use crate::errors::NoteStoreError;
use crate::{Note, NoteID};
use sqlx::{query, query_as, query_scalar, PgPool};

#[derive(sqlx::FromRow)]
pub(super) struct NoteRow {
    id: i64,
    title: String,
    content: String,
}

impl NoteRow {
    pub(super) fn into_note(self) -> Note {
        Note {
            id: self.id.into(),
            title: self.title,
            content: self.content,
        }
    }
}

pub(super) async fn select_notes(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<NoteRow>, NoteStoreError> {
    let rows = query_as::<_, NoteRow>(
        r#"
        SELECT id, title, content
        FROM notes
        ORDER BY id ASC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub(super) async fn select_note(pool: &PgPool, id: NoteID) -> Result<NoteRow, NoteStoreError> {
    query_as::<_, NoteRow>(r#"SELECT id, title, content FROM notes WHERE id = $1"#)
        .bind(id.as_i64())
        .fetch_one(pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => NoteStoreError::NoteNotExist(id),
            e => NoteStoreError::PostgreSQLError(e),
        })
}

/// `RETURNING` hands back the ID assigned by the sequence.
pub(super) async fn insert_note(pool: &PgPool, note: &Note) -> Result<NoteID, NoteStoreError> {
    let id: i64 = query_scalar(
        r#"INSERT INTO notes (title, content) VALUES ($1, $2) RETURNING id"#,
    )
    .bind(&note.title)
    .bind(&note.content)
    .fetch_one(pool)
    .await?;
    Ok(id.into())
}

pub(super) async fn delete_note(pool: &PgPool, id: NoteID) -> Result<u64, NoteStoreError> {
    let res = query(r#"DELETE FROM notes WHERE id = $1"#)
        .bind(id.as_i64())
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub(super) async fn update_note(pool: &PgPool, note: &Note) -> Result<u64, NoteStoreError> {
    let res = query(r#"UPDATE notes SET title = $1, content = $2 WHERE id = $3"#)
        .bind(&note.title)
        .bind(&note.content)
        .bind(note.id.as_i64())
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
