// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prodcal::OrderRepository;
use prodcal_domain::ProductionOrder;
use tracing::{info, warn};

use crate::blob::BlobStore;
use crate::envelope::{
    LEGACY_STORAGE_KEY, QUARANTINE_KEY, STORAGE_KEY, decode_payload, encode_orders,
};
use crate::error::PersistenceError;

/// Stores the order list as a single versioned blob.
///
/// Loading falls back to the legacy key when the current key is empty. A
/// legacy blob is removed after the first successful save in the current
/// format. A payload that fails to decode is copied to [`QUARANTINE_KEY`]
/// before the error is returned, so a later save cannot destroy it.
pub struct BlobOrderRepository<S: BlobStore> {
    store: S,
    legacy_pending: bool,
}

impl<S: BlobStore> BlobOrderRepository<S> {
    /// Wraps a blob store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            legacy_pending: false,
        }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwraps the underlying store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: BlobStore> BlobOrderRepository<S> {
    fn decode_or_quarantine(
        &mut self,
        key: &str,
        payload: &str,
    ) -> Result<Vec<ProductionOrder>, PersistenceError> {
        decode_payload(payload).inspect_err(|e| {
            warn!(
                "Payload under '{}' is unreadable ({}); copying to '{}'",
                key, e, QUARANTINE_KEY
            );
            if let Err(copy_err) = self.store.put(QUARANTINE_KEY, payload) {
                warn!("Failed to quarantine unreadable payload: {}", copy_err);
            }
        })
    }
}

impl<S: BlobStore> OrderRepository for BlobOrderRepository<S> {
    type Error = PersistenceError;

    fn load(&mut self) -> Result<Option<Vec<ProductionOrder>>, Self::Error> {
        if let Some(payload) = self.store.get(STORAGE_KEY)? {
            return self.decode_or_quarantine(STORAGE_KEY, &payload).map(Some);
        }

        if let Some(payload) = self.store.get(LEGACY_STORAGE_KEY)? {
            let orders: Vec<ProductionOrder> =
                self.decode_or_quarantine(LEGACY_STORAGE_KEY, &payload)?;
            info!(
                "Migrated {} orders from legacy key '{}'",
                orders.len(),
                LEGACY_STORAGE_KEY
            );
            self.legacy_pending = true;
            return Ok(Some(orders));
        }

        Ok(None)
    }

    fn save(&mut self, orders: &[ProductionOrder]) -> Result<(), Self::Error> {
        let payload: String = encode_orders(orders)?;
        self.store.put(STORAGE_KEY, &payload)?;

        if self.legacy_pending {
            self.store.remove(LEGACY_STORAGE_KEY)?;
            self.legacy_pending = false;
            info!("Removed legacy key '{}'", LEGACY_STORAGE_KEY);
        }
        Ok(())
    }
}
