// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::backend;
use crate::blob::BlobStore;
use crate::diesel_schema::durable_blobs;
use crate::error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so tests
/// never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Blob store persisted in a `SQLite` database.
///
/// Blobs live in the `durable_blobs` table, one row per key.
pub struct SqliteBlobStore {
    conn: SqliteConnection,
}

impl SqliteBlobStore {
    /// Creates a store over a fresh in-memory `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a store over a file-based `SQLite` database, creating it if needed.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        let payload: Option<String> = durable_blobs::table
            .find(key)
            .select(durable_blobs::payload)
            .first::<String>(&mut self.conn)
            .optional()?;
        Ok(payload)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        diesel::replace_into(durable_blobs::table)
            .values((
                durable_blobs::blob_key.eq(key),
                durable_blobs::payload.eq(value),
            ))
            .execute(&mut self.conn)?;

        debug!(key, bytes = value.len(), "Stored blob");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        diesel::delete(durable_blobs::table.find(key)).execute(&mut self.conn)?;
        Ok(())
    }
}
