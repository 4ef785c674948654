// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical sample orders used when no persisted data exists.

use crate::calendar::shift_days;
use crate::error::DomainError;
use crate::types::{AreaConfig, OrderId, OrderStatus, ProductionOrder};
use time::Date;

/// One seeded order: status, start offset from today, length in days, progress.
struct SeedEntry {
    status: OrderStatus,
    offset_days: i64,
    length_days: i64,
    progress: u8,
}

const SEED_PLAN: [SeedEntry; 4] = [
    SeedEntry {
        status: OrderStatus::Planned,
        offset_days: -3,
        length_days: 2,
        progress: 0,
    },
    SeedEntry {
        status: OrderStatus::InProgress,
        offset_days: -2,
        length_days: 3,
        progress: 60,
    },
    SeedEntry {
        status: OrderStatus::Completed,
        offset_days: 1,
        length_days: 2,
        progress: 100,
    },
    SeedEntry {
        status: OrderStatus::Cancelled,
        offset_days: 5,
        length_days: 1,
        progress: 0,
    },
];

/// Builds the seed set anchored at `today`.
///
/// One order per status, each in its own area (the first four configured
/// areas, in order) and assigned to the matching entry of `assignees`.
/// Fewer areas yield fewer orders.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows.
pub fn seed_orders(
    today: Date,
    areas: &[AreaConfig],
    assignees: &[String],
) -> Result<Vec<ProductionOrder>, DomainError> {
    let mut orders: Vec<ProductionOrder> = Vec::with_capacity(SEED_PLAN.len());
    for (index, (entry, area)) in SEED_PLAN.iter().zip(areas).enumerate() {
        let start: Date = shift_days(today, entry.offset_days)?;
        let end: Date = shift_days(today, entry.offset_days + entry.length_days - 1)?;

        let mut id: OrderId = OrderId::generate();
        while orders.iter().any(|order| order.id == id) {
            id = OrderId::generate();
        }

        orders.push(ProductionOrder {
            id,
            area: area.label.clone(),
            assignee: assignees.get(index).cloned(),
            start,
            end,
            status: entry.status,
            color: area.color(),
            progress: entry.progress,
        });
    }
    Ok(orders)
}
