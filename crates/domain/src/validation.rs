// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{DateRange, OrderId, ProductionOrder};
use time::Date;
use time::macros::format_description;

/// Finds the first order in `area` whose range overlaps `range`.
///
/// This is the representative domain rule of the scheduler.
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `area` - The area label the candidate is scheduled in
/// * `range` - The candidate's inclusive range
/// * `orders` - The existing orders
/// * `exclude_id` - An order to ignore (the order being moved)
///
/// # Returns
///
/// The conflicting order, or `None` if the range is free.
#[must_use]
pub fn find_overlap<'a>(
    area: &str,
    range: &DateRange,
    orders: &'a [ProductionOrder],
    exclude_id: Option<&OrderId>,
) -> Option<&'a ProductionOrder> {
    orders
        .iter()
        .filter(|order| exclude_id != Some(&order.id))
        .filter(|order| order.area == area)
        .find(|order| range.overlaps(&order.range()))
}

/// Validates that no other order in `area` overlaps `range`.
///
/// # Errors
///
/// Returns `DomainError::Overlap` naming the first conflicting order.
pub fn validate_no_overlap(
    area: &str,
    range: &DateRange,
    orders: &[ProductionOrder],
    exclude_id: Option<&OrderId>,
) -> Result<(), DomainError> {
    // Rule: within an area, inclusive ranges must not share a day
    if let Some(conflict) = find_overlap(area, range, orders, exclude_id) {
        return Err(DomainError::Overlap {
            area: area.to_string(),
            requested: *range,
            conflicting_id: conflict.id.clone(),
        });
    }
    Ok(())
}

/// Lists every pair of orders that currently violates the overlap rule.
///
/// Each pair is reported once, in list order.
#[must_use]
pub fn find_conflicts(orders: &[ProductionOrder]) -> Vec<(OrderId, OrderId)> {
    let mut conflicts: Vec<(OrderId, OrderId)> = Vec::new();
    for (index, first) in orders.iter().enumerate() {
        for second in &orders[index + 1..] {
            if first.area == second.area && first.range().overlaps(&second.range()) {
                conflicts.push((first.id.clone(), second.id.clone()));
            }
        }
    }
    conflicts
}

/// Validates that `end` does not precede `start`.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` if `end < start`.
pub fn validate_date_range(start: Date, end: Date) -> Result<DateRange, DomainError> {
    if end < start {
        return Err(DomainError::InvalidDateRange { start, end });
    }
    Ok(DateRange::new(start, end))
}

/// Validates that a progress value is a percentage.
///
/// # Errors
///
/// Returns `DomainError::InvalidProgress` if `value > 100`.
pub const fn validate_progress(value: u8) -> Result<u8, DomainError> {
    if value > 100 {
        return Err(DomainError::InvalidProgress { value });
    }
    Ok(value)
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}
