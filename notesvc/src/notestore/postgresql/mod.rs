use crate::errors::NoteStoreError;
use crate::notestore::page_offset;
use crate::{Note, NoteID, NoteStore};
use futures::future::BoxFuture;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool};

mod queries;
use queries::*;


pub struct PostgreSQLStoreBuilder {
    db_options: PgConnectOptions,
    max_connections: u32,
    min_connections: u32,
}

impl PostgreSQLStoreBuilder {
    pub fn new(db_options: PgConnectOptions) -> Self {
        Self {
            db_options,
            max_connections: 10,
            min_connections: 0,
        }
    }

    /// Maximum number of open connections in the pool.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Number of connections the pool keeps open while idle.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Connect to the database and check that it answers.
    pub async fn build(self) -> Result<PostgreSQLStore, NoteStoreError> {
        let connection_pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections.min(self.max_connections))
            .connect_with(self.db_options)
            .await?;
        connection_pool.acquire().await?.ping().await?;
        info!(
            max_connections = self.max_connections,
            "PostgreSQL connection established"
        );
        Ok(PostgreSQLStore {
            db_pool: connection_pool,
        })
    }
}

pub struct PostgreSQLStore {
    db_pool: PgPool,
}

impl NoteStore for PostgreSQLStore {
    fn read_note_list(
        &self,
        size: i64,
        page: i64,
    ) -> BoxFuture<'_, Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move {
            let offset = page_offset(size, page)?;
            let rows = select_notes(&self.db_pool, size, offset).await?;
            Ok(rows.into_iter().map(|r| r.into_note()).collect())
        })
    }

    fn read_note(&self, id: NoteID) -> BoxFuture<'_, Result<Note, NoteStoreError>> {
        Box::pin(async move { Ok(select_note(&self.db_pool, id).await?.into_note()) })
    }

    fn add_note(&self, note: Note) -> BoxFuture<'_, Result<NoteID, NoteStoreError>> {
        Box::pin(async move { insert_note(&self.db_pool, &note).await })
    }

    fn remove_note(&self, id: NoteID) -> BoxFuture<'_, Result<(), NoteStoreError>> {
        Box::pin(async move {
            let deleted = delete_note(&self.db_pool, id).await?;
            if deleted != 1 {
                return Err(NoteStoreError::UnexpectedDeleteCount(deleted));
            }
            Ok(())
        })
    }

    fn update_note(&self, note: Note) -> BoxFuture<'_, Result<(), NoteStoreError>> {
        Box::pin(async move {
            let updated = update_note(&self.db_pool, &note).await?;
            if updated != 1 {
                return Err(NoteStoreError::UnexpectedUpdateCount(updated));
            }
            Ok(())
        })
    }

    fn close(&self) -> BoxFuture<'_, Result<(), NoteStoreError>> {
        Box::pin(async move {
            self.db_pool.close().await;
            info!("PostgreSQL connection closed");
            Ok(())
        })
    }
}
