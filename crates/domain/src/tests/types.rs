// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_order;
use crate::{
    AreaConfig, DateRange, DomainError, NewOrder, OrderId, OrderPatch, OrderStatus,
    ProductionOrder, default_areas, default_assignees,
};
use std::str::FromStr;
use time::macros::date;

fn create_test_new_order(status: OrderStatus, progress: Option<u8>) -> NewOrder {
    NewOrder {
        area: String::from("Area A"),
        assignee: None,
        start: date!(2024-01-01),
        end: date!(2024-01-05),
        status,
        color: String::from("hsl(var(--area-a))"),
        progress,
    }
}

#[test]
fn test_generated_order_id_is_eight_hex_chars() {
    let id: OrderId = OrderId::generate();
    assert_eq!(id.value().len(), 8);
    assert!(id.value().chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(id.value(), id.value().to_lowercase());
}

#[test]
fn test_order_id_short_label() {
    let id: OrderId = OrderId::new("a1b2c3d4");
    assert_eq!(id.short_label(), "A1B2C3");

    let short: OrderId = OrderId::new("ab");
    assert_eq!(short.short_label(), "AB");
}

#[test]
fn test_order_status_round_trips_through_str() {
    for status in OrderStatus::ALL {
        assert_eq!(OrderStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_order_status_rejects_unknown() {
    let result: Result<OrderStatus, DomainError> = OrderStatus::from_str("done");
    assert_eq!(result, Err(DomainError::InvalidStatus(String::from("done"))));
}

#[test]
fn test_order_status_labels() {
    assert_eq!(OrderStatus::InProgress.label(), "In Progress");
    assert_eq!(OrderStatus::Planned.label(), "Planned");
}

#[test]
fn test_completed_defaults_to_full_progress() {
    let order: NewOrder = create_test_new_order(OrderStatus::Completed, None);
    assert_eq!(order.effective_progress(), 100);
}

#[test]
fn test_other_statuses_default_to_zero_progress() {
    for status in [
        OrderStatus::Planned,
        OrderStatus::InProgress,
        OrderStatus::Cancelled,
    ] {
        let order: NewOrder = create_test_new_order(status, None);
        assert_eq!(order.effective_progress(), 0);
    }
}

#[test]
fn test_explicit_progress_wins_over_default() {
    let order: NewOrder = create_test_new_order(OrderStatus::Completed, Some(40));
    assert_eq!(order.effective_progress(), 40);
}

#[test]
fn test_new_order_into_order_keeps_fields() {
    let order: ProductionOrder = create_test_new_order(OrderStatus::Planned, None)
        .into_order(OrderId::new("0000abcd"));
    assert_eq!(order.id.value(), "0000abcd");
    assert_eq!(order.area, "Area A");
    assert_eq!(order.start, date!(2024-01-01));
    assert_eq!(order.end, date!(2024-01-05));
    assert_eq!(order.progress, 0);
}

#[test]
fn test_area_color_token() {
    let area: AreaConfig = AreaConfig::new("A", "Area A", "--area-a");
    assert_eq!(area.color(), "hsl(var(--area-a))");
    assert!(area.matches("Area A"));
    assert!(area.matches("A"));
    assert!(!area.matches("Area B"));
}

#[test]
fn test_default_configuration() {
    let areas: Vec<AreaConfig> = default_areas();
    assert_eq!(areas.len(), 4);
    assert_eq!(areas[3].label, "Area D");
    assert_eq!(areas[3].color_var, "--area-d");
    assert_eq!(default_assignees().len(), 5);
}

#[test]
fn test_date_range_duration_is_inclusive() {
    let range: DateRange = DateRange::new(date!(2024-01-01), date!(2024-01-05));
    assert_eq!(range.duration_days(), 5);

    let single: DateRange = DateRange::new(date!(2024-01-01), date!(2024-01-01));
    assert_eq!(single.duration_days(), 1);
}

#[test]
fn test_date_range_overlap_includes_touching_boundaries() {
    let first: DateRange = DateRange::new(date!(2024-01-01), date!(2024-01-05));
    let touching: DateRange = DateRange::new(date!(2024-01-05), date!(2024-01-06));
    let after: DateRange = DateRange::new(date!(2024-01-06), date!(2024-01-10));
    let inside: DateRange = DateRange::new(date!(2024-01-02), date!(2024-01-03));

    assert!(first.overlaps(&touching));
    assert!(touching.overlaps(&first));
    assert!(!first.overlaps(&after));
    assert!(first.overlaps(&inside));
    assert!(inside.overlaps(&first));
}

#[test]
fn test_date_range_shift_preserves_span() {
    let range: DateRange = DateRange::new(date!(2024-02-27), date!(2024-03-02));
    let shifted: DateRange = range.shifted(3).unwrap();
    assert_eq!(shifted.start, date!(2024-03-01));
    assert_eq!(shifted.end, date!(2024-03-05));
    assert_eq!(shifted.duration_days(), range.duration_days());

    let back: DateRange = shifted.shifted(-3).unwrap();
    assert_eq!(back, range);
}

#[test]
fn test_date_range_shift_overflow_is_an_error() {
    let range: DateRange = DateRange::new(time::Date::MAX, time::Date::MAX);
    assert!(matches!(
        range.shifted(1),
        Err(DomainError::DateArithmeticOverflow { .. })
    ));
}

#[test]
fn test_date_range_contains() {
    let range: DateRange = DateRange::new(date!(2024-01-01), date!(2024-01-05));
    assert!(range.contains(date!(2024-01-01)));
    assert!(range.contains(date!(2024-01-05)));
    assert!(!range.contains(date!(2024-01-06)));
}

#[test]
fn test_patch_merges_only_present_fields() {
    let mut order: ProductionOrder = create_test_order(
        "abcd0001",
        "Area A",
        date!(2024-01-01),
        date!(2024-01-05),
    );
    let patch: OrderPatch = OrderPatch {
        status: Some(OrderStatus::InProgress),
        progress: Some(35),
        assignee: Some(None),
        ..OrderPatch::default()
    };
    assert!(!patch.touches_schedule());
    patch.apply_to(&mut order);

    assert_eq!(order.status, OrderStatus::InProgress);
    assert_eq!(order.progress, 35);
    assert_eq!(order.assignee, None);
    assert_eq!(order.area, "Area A");
    assert_eq!(order.start, date!(2024-01-01));
}

#[test]
fn test_empty_patch() {
    assert!(OrderPatch::default().is_empty());
    let patch: OrderPatch = OrderPatch {
        end: Some(date!(2024-01-09)),
        ..OrderPatch::default()
    };
    assert!(!patch.is_empty());
    assert!(patch.touches_schedule());
}

#[test]
fn test_order_serializes_with_iso_dates() {
    let order: ProductionOrder = create_test_order(
        "abcd0001",
        "Area A",
        date!(2024-01-01),
        date!(2024-01-05),
    );
    let value: serde_json::Value = serde_json::to_value(&order).unwrap();
    assert_eq!(value["id"], "abcd0001");
    assert_eq!(value["start"], "2024-01-01");
    assert_eq!(value["end"], "2024-01-05");
    assert_eq!(value["status"], "planned");
    assert_eq!(value["progress"], 0);
}

#[test]
fn test_order_deserializes_without_assignee() {
    let json: &str = r#"{"id":"abcd0001","area":"Area B","start":"2024-03-01","end":"2024-03-02","status":"in_progress","color":"hsl(var(--area-b))","progress":60}"#;
    let order: ProductionOrder = serde_json::from_str(json).unwrap();
    assert_eq!(order.assignee, None);
    assert_eq!(order.status, OrderStatus::InProgress);
    assert_eq!(order.duration_days(), 2);
}
