// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prodcal_domain::ProductionOrder;

/// Durable storage for the complete order list.
///
/// The manager reads the list once at startup and rewrites all of it after
/// every successful mutation. Implementations decide the encoding.
pub trait OrderRepository {
    /// The storage error type.
    type Error: std::error::Error;

    /// Reads the stored order list.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or its content cannot be decoded.
    fn load(&mut self) -> Result<Option<Vec<ProductionOrder>>, Self::Error>;

    /// Replaces the stored order list.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save(&mut self, orders: &[ProductionOrder]) -> Result<(), Self::Error>;
}
