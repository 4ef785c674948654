// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod calendar;
mod error;
mod seed;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{
    ViewMode, calendar_weeks, day_delta, end_of_month, end_of_week, month_matrix, shift_days,
    start_of_month, start_of_week, week_row,
};
pub use seed::seed_orders;

// Re-export public types
pub use error::DomainError;
pub use types::{
    AreaConfig, DEFAULT_ASSIGNEES, DateRange, NewOrder, OrderId, OrderPatch, OrderStatus,
    ProductionOrder, default_areas, default_assignees,
};
pub use validation::{
    find_conflicts, find_overlap, parse_iso_date, validate_date_range, validate_no_overlap,
    validate_progress,
};
