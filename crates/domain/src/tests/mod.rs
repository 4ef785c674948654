// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod error;
mod types;
mod validation;

use crate::{OrderId, OrderStatus, ProductionOrder};
use time::Date;

pub fn create_test_order(id: &str, area: &str, start: Date, end: Date) -> ProductionOrder {
    ProductionOrder {
        id: OrderId::new(id),
        area: String::from(area),
        assignee: Some(String::from("Alex Kim")),
        start,
        end,
        status: OrderStatus::Planned,
        color: String::from("hsl(var(--area-a))"),
        progress: 0,
    }
}
