// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the production calendar.
//!
//! State is kept as string blobs in a [`BlobStore`]. Two stores are provided:
//!
//! - [`MemoryBlobStore`]: volatile, with an optional byte quota
//! - [`SqliteBlobStore`]: durable, built on Diesel with embedded migrations
//!
//! [`BlobOrderRepository`] adapts any store to the core `OrderRepository`
//! port using the versioned payload format in [`envelope`].
//!
//! ## Testing
//!
//! Tests run against in-memory `SQLite` databases; each
//! `SqliteBlobStore::new_in_memory()` call gets its own database.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod blob;
mod diesel_schema;
pub mod envelope;
mod error;
mod repository;
mod sqlite_store;

#[cfg(test)]
mod tests;

pub use blob::{BlobStore, MemoryBlobStore};
pub use error::PersistenceError;
pub use repository::BlobOrderRepository;
pub use sqlite_store::SqliteBlobStore;
