// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use prodcal::{FixedClock, OrderManager, OrderRepository, SchedulerConfig};
use prodcal_domain::{OrderId, OrderStatus, ProductionOrder};
use prodcal_persistence::{BlobOrderRepository, MemoryBlobStore};
use time::Date;
use time::macros::date;

use crate::CreateOrderRequest;

pub const TODAY: Date = date!(2024-01-15);

pub type TestManager = OrderManager<BlobOrderRepository<MemoryBlobStore>, FixedClock>;

/// Builds a manager whose storage already holds `orders`, so nothing is seeded.
pub fn create_test_manager(orders: &[ProductionOrder]) -> TestManager {
    let mut repository: BlobOrderRepository<MemoryBlobStore> =
        BlobOrderRepository::new(MemoryBlobStore::new());
    repository.save(orders).unwrap();
    OrderManager::initialize(repository, FixedClock(TODAY), SchedulerConfig::default())
}

pub fn create_test_order(id: &str, area: &str, start: Date, end: Date) -> ProductionOrder {
    ProductionOrder {
        id: OrderId::new(id),
        area: String::from(area),
        assignee: None,
        start,
        end,
        status: OrderStatus::Planned,
        color: String::from("hsl(var(--area-a))"),
        progress: 0,
    }
}

/// Area A holds `abcdef12` on 2024-01-10..=2024-01-12.
pub fn create_single_order_manager() -> TestManager {
    create_test_manager(&[create_test_order(
        "abcdef12",
        "Area A",
        date!(2024-01-10),
        date!(2024-01-12),
    )])
}

pub fn create_valid_request() -> CreateOrderRequest {
    CreateOrderRequest {
        area: String::from("Area A"),
        assignee: Some(String::from("Sam Patel")),
        start: String::from("2024-01-20"),
        end: String::from("2024-01-22"),
        status: String::from("planned"),
        progress: None,
    }
}
