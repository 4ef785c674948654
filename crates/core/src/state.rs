// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prodcal_domain::{DateRange, OrderId, ProductionOrder};

/// The canonical order list.
///
/// List order is display order: newly created orders are prepended.
/// Identifiers are unique within the book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    /// All orders, most recently created first.
    pub orders: Vec<ProductionOrder>,
}

impl OrderBook {
    /// Creates an empty book.
    #[must_use]
    pub const fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Wraps an existing order list.
    #[must_use]
    pub const fn from_orders(orders: Vec<ProductionOrder>) -> Self {
        Self { orders }
    }

    /// Looks up an order by identifier.
    #[must_use]
    pub fn find(&self, id: &OrderId) -> Option<&ProductionOrder> {
        self.orders.iter().find(|order| &order.id == id)
    }

    /// Checks if an identifier is in use.
    #[must_use]
    pub fn contains(&self, id: &OrderId) -> bool {
        self.find(id).is_some()
    }

    /// Number of orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks if the book holds no orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// What a successful transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// An order was created and prepended.
    Created(ProductionOrder),
    /// An order's dates were shifted.
    Moved {
        /// The moved order.
        order_id: OrderId,
        /// The range before the move.
        from: DateRange,
        /// The range after the move.
        to: DateRange,
    },
    /// An order was patched.
    Updated(ProductionOrder),
    /// Nothing matched; the book is unchanged.
    Unchanged,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new order book after the transition.
    pub new_book: OrderBook,
    /// What the transition did.
    pub outcome: TransitionOutcome,
}

/// Whether the last write to durable storage succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersistenceHealth {
    /// The stored blob matches the in-memory order list.
    #[default]
    Healthy,
    /// The last write failed; in-memory changes are not durable.
    Degraded {
        /// The storage error message.
        reason: String,
    },
}

impl PersistenceHealth {
    /// Checks whether storage is currently failing.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}
