// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key/value blob storage.
//!
//! Application state is stored as whole string blobs under fixed keys.
//! Every write replaces the previous value for its key.

use std::collections::HashMap;
use tracing::debug;

use crate::error::PersistenceError;

/// A durable string key/value store.
pub trait BlobStore {
    /// Reads the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get(&mut self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected; the previous value is kept.
    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Deletes the blob under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// Volatile blob store backed by a `HashMap`.
///
/// An optional quota caps the total bytes of keys and values held, and
/// writes that would exceed it fail with [`PersistenceError::QuotaExceeded`].
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBlobStore {
    /// Creates an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store holding at most `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            blobs: HashMap::new(),
            quota: Some(quota),
        }
    }

    /// Bytes currently held (keys plus values).
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.blobs
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }

    /// Number of stored blobs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Checks if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if let Some(quota) = self.quota {
            let replaced: usize = self
                .blobs
                .get(key)
                .map_or(0, |previous| key.len() + previous.len());
            let required: usize = self.used_bytes() - replaced + key.len() + value.len();
            if required > quota {
                return Err(PersistenceError::QuotaExceeded {
                    key: key.to_string(),
                    required,
                    quota,
                });
            }
        }

        debug!(key, bytes = value.len(), "Stored blob");
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.blobs.remove(key);
        Ok(())
    }
}
