// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prodcal_domain::{NewOrder, OrderId, OrderPatch};

/// A command represents an intended change to the order list as data only.
///
/// Commands are the only way to request order list changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new order under a pre-assigned identifier.
    CreateOrder {
        /// The fresh identifier for the order.
        order_id: OrderId,
        /// The order fields.
        input: NewOrder,
    },
    /// Shift an order's start and end by a number of days.
    MoveOrder {
        /// The order to move.
        order_id: OrderId,
        /// Calendar days to shift by (negative moves earlier).
        day_delta: i64,
    },
    /// Merge a partial update into an order without any rule checks.
    UpdateOrder {
        /// The order to update.
        order_id: OrderId,
        /// The fields to replace.
        patch: OrderPatch,
    },
}
