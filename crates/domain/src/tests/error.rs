// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DateRange, DomainError, OrderId};
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::Overlap {
        area: String::from("Area A"),
        requested: DateRange::new(date!(2024-01-05), date!(2024-01-06)),
        conflicting_id: OrderId::new("abcd1234"),
    };
    assert_eq!(
        format!("{err}"),
        "Overlapping order in the same area and dates: 2024-01-05 to 2024-01-06 in 'Area A' conflicts with order abcd1234"
    );

    let err: DomainError = DomainError::OrderNotFound(OrderId::new("deadbeef"));
    assert_eq!(format!("{err}"), "Order not found: deadbeef");

    let err: DomainError = DomainError::InvalidDateRange {
        start: date!(2024-01-10),
        end: date!(2024-01-01),
    };
    assert_eq!(
        format!("{err}"),
        "End date must be after start date: 2024-01-01 is before 2024-01-10"
    );

    let err: DomainError = DomainError::InvalidProgress { value: 150 };
    assert_eq!(
        format!("{err}"),
        "Invalid progress: 150. Must be between 0 and 100"
    );

    let err: DomainError = DomainError::InvalidStatus(String::from("done"));
    assert_eq!(format!("{err}"), "Invalid status: done");

    let err: DomainError = DomainError::InvalidViewMode(String::from("year"));
    assert_eq!(format!("{err}"), "Invalid view mode: year");

    let err: DomainError = DomainError::AreaNotFound(String::from("Area Z"));
    assert_eq!(format!("{err}"), "Area 'Area Z' not found");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("bogus"),
        error: String::from("bad"),
    };
    assert_eq!(format!("{err}"), "Failed to parse date 'bogus': bad");

    let err: DomainError = DomainError::DateArithmeticOverflow {
        operation: String::from("testing"),
    };
    assert_eq!(format!("{err}"), "Date arithmetic overflow while testing");
}

#[test]
fn test_domain_error_is_std_error() {
    let err: DomainError = DomainError::InvalidStatus(String::from("x"));
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "Invalid status: x");
}
