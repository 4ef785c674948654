// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_order;
use crate::{
    DateRange, DomainError, OrderId, ProductionOrder, find_conflicts, find_overlap,
    parse_iso_date, validate_date_range, validate_no_overlap, validate_progress,
};
use time::macros::date;

fn create_existing_orders() -> Vec<ProductionOrder> {
    vec![
        create_test_order("aaaa0001", "Area A", date!(2024-01-01), date!(2024-01-05)),
        create_test_order("bbbb0001", "Area B", date!(2024-01-01), date!(2024-01-05)),
    ]
}

#[test]
fn test_touching_range_in_same_area_overlaps() {
    let orders: Vec<ProductionOrder> = create_existing_orders();
    let candidate: DateRange = DateRange::new(date!(2024-01-05), date!(2024-01-06));

    let result: Result<(), DomainError> = validate_no_overlap("Area A", &candidate, &orders, None);

    assert_eq!(
        result,
        Err(DomainError::Overlap {
            area: String::from("Area A"),
            requested: candidate,
            conflicting_id: OrderId::new("aaaa0001"),
        })
    );
}

#[test]
fn test_following_range_in_same_area_is_free() {
    let orders: Vec<ProductionOrder> = create_existing_orders();
    let candidate: DateRange = DateRange::new(date!(2024-01-06), date!(2024-01-10));

    assert!(validate_no_overlap("Area A", &candidate, &orders, None).is_ok());
}

#[test]
fn test_identical_range_in_other_area_is_free() {
    let orders: Vec<ProductionOrder> = vec![create_test_order(
        "aaaa0001",
        "Area A",
        date!(2024-01-01),
        date!(2024-01-05),
    )];
    let candidate: DateRange = DateRange::new(date!(2024-01-01), date!(2024-01-05));

    assert!(validate_no_overlap("Area C", &candidate, &orders, None).is_ok());
}

#[test]
fn test_enclosing_range_overlaps() {
    let orders: Vec<ProductionOrder> = create_existing_orders();
    let candidate: DateRange = DateRange::new(date!(2023-12-01), date!(2024-02-01));

    let conflict: Option<&ProductionOrder> = find_overlap("Area B", &candidate, &orders, None);
    assert_eq!(conflict.map(|o| o.id.value()), Some("bbbb0001"));
}

#[test]
fn test_excluded_order_is_ignored() {
    let orders: Vec<ProductionOrder> = create_existing_orders();
    let candidate: DateRange = DateRange::new(date!(2024-01-03), date!(2024-01-07));
    let exclude: OrderId = OrderId::new("aaaa0001");

    assert!(validate_no_overlap("Area A", &candidate, &orders, Some(&exclude)).is_ok());
}

#[test]
fn test_find_conflicts_reports_each_pair_once() {
    let orders: Vec<ProductionOrder> = vec![
        create_test_order("aaaa0001", "Area A", date!(2024-01-01), date!(2024-01-05)),
        create_test_order("aaaa0002", "Area A", date!(2024-01-04), date!(2024-01-08)),
        create_test_order("bbbb0001", "Area B", date!(2024-01-04), date!(2024-01-08)),
        create_test_order("aaaa0003", "Area A", date!(2024-01-09), date!(2024-01-10)),
    ];

    let conflicts: Vec<(OrderId, OrderId)> = find_conflicts(&orders);

    assert_eq!(
        conflicts,
        vec![(OrderId::new("aaaa0001"), OrderId::new("aaaa0002"))]
    );
}

#[test]
fn test_find_conflicts_on_clean_list() {
    assert!(find_conflicts(&create_existing_orders()).is_empty());
}

#[test]
fn test_date_range_validation() {
    assert!(validate_date_range(date!(2024-01-01), date!(2024-01-01)).is_ok());
    assert!(validate_date_range(date!(2024-01-01), date!(2024-01-02)).is_ok());
    assert_eq!(
        validate_date_range(date!(2024-01-02), date!(2024-01-01)),
        Err(DomainError::InvalidDateRange {
            start: date!(2024-01-02),
            end: date!(2024-01-01),
        })
    );
}

#[test]
fn test_progress_validation() {
    assert_eq!(validate_progress(0), Ok(0));
    assert_eq!(validate_progress(100), Ok(100));
    assert_eq!(
        validate_progress(101),
        Err(DomainError::InvalidProgress { value: 101 })
    );
}

#[test]
fn test_parse_iso_date() {
    assert_eq!(parse_iso_date("2024-01-05").unwrap(), date!(2024-01-05));
    assert_eq!(parse_iso_date(" 2024-12-31 ").unwrap(), date!(2024-12-31));
}

#[test]
fn test_parse_iso_date_rejects_garbage() {
    for input in ["", "2024-13-01", "2024-02-30", "05/01/2024", "2024-01-05T00:00"] {
        assert!(
            matches!(
                parse_iso_date(input),
                Err(DomainError::DateParseError { .. })
            ),
            "expected parse failure for {input:?}"
        );
    }
}
