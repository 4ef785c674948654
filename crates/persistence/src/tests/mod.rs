// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod envelope_tests;

use prodcal_domain::{OrderId, OrderStatus, ProductionOrder};
use time::Date;
use time::macros::date;

pub fn create_test_order(id: &str, area: &str, start: Date, end: Date) -> ProductionOrder {
    ProductionOrder {
        id: OrderId::new(id),
        area: String::from(area),
        assignee: Some(String::from("Alex Kim")),
        start,
        end,
        status: OrderStatus::InProgress,
        color: String::from("hsl(var(--area-a))"),
        progress: 60,
    }
}

pub fn create_test_orders() -> Vec<ProductionOrder> {
    vec![
        create_test_order("aaaa0001", "Area A", date!(2024-01-01), date!(2024-01-05)),
        create_test_order("bbbb0001", "Area B", date!(2024-01-03), date!(2024-01-04)),
    ]
}
