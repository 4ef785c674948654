// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::PersistenceError;
use crate::envelope::{CURRENT_VERSION, decode_payload, encode_orders, payload_version};
use crate::tests::{create_test_order, create_test_orders};
use prodcal_domain::ProductionOrder;
use serde_json::Value;
use time::macros::date;

#[test]
fn test_encoded_payload_layout() {
    let orders: Vec<ProductionOrder> = vec![create_test_order(
        "aaaa0001",
        "Area A",
        date!(2024-01-01),
        date!(2024-01-05),
    )];

    let payload: String = encode_orders(&orders).unwrap();
    let value: Value = serde_json::from_str(&payload).unwrap();

    assert_eq!(value["version"], CURRENT_VERSION);
    let order: &Value = &value["orders"][0];
    assert_eq!(order["id"], "aaaa0001");
    assert_eq!(order["area"], "Area A");
    assert_eq!(order["assignee"], "Alex Kim");
    assert_eq!(order["start"], "2024-01-01");
    assert_eq!(order["end"], "2024-01-05");
    assert_eq!(order["status"], "in_progress");
    assert_eq!(order["color"], "hsl(var(--area-a))");
    assert_eq!(order["progress"], 60);
}

#[test]
fn test_current_payload_decodes_to_same_orders() {
    let orders: Vec<ProductionOrder> = create_test_orders();
    let payload: String = encode_orders(&orders).unwrap();

    assert_eq!(decode_payload(&payload).unwrap(), orders);
}

#[test]
fn test_version_one_array_is_upgraded() {
    let payload: &str = r#"[{"id":"0a1b2c3d","area":"Area C","start":"2024-02-01","end":"2024-02-02","status":"completed","color":"hsl(var(--area-c))","progress":100}]"#;

    let orders: Vec<ProductionOrder> = decode_payload(payload).unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id.value(), "0a1b2c3d");
    assert_eq!(orders[0].assignee, None);
    assert_eq!(orders[0].end, date!(2024-02-02));
}

#[test]
fn test_payload_version_detection() {
    assert_eq!(payload_version(&serde_json::json!([])).unwrap(), 1);
    assert_eq!(
        payload_version(&serde_json::json!({"version": 2, "orders": []})).unwrap(),
        2
    );
    assert!(payload_version(&serde_json::json!({"orders": []})).is_err());
    assert!(payload_version(&serde_json::json!("orders")).is_err());
}

#[test]
fn test_future_version_is_rejected() {
    let result: Result<Vec<ProductionOrder>, PersistenceError> =
        decode_payload(r#"{"version":3,"orders":[]}"#);

    assert_eq!(result.unwrap_err(), PersistenceError::UnsupportedVersion(3));
}

#[test]
fn test_version_without_upgrade_path_is_rejected() {
    let result: Result<Vec<ProductionOrder>, PersistenceError> =
        decode_payload(r#"{"version":0,"orders":[]}"#);

    assert_eq!(result.unwrap_err(), PersistenceError::UnsupportedVersion(0));
}

#[test]
fn test_corrupt_payload_is_a_serialization_error() {
    assert!(matches!(
        decode_payload("{not json"),
        Err(PersistenceError::SerializationError(_))
    ));
    assert!(matches!(
        decode_payload(r#"{"version":2,"orders":[{"id":"x"}]}"#),
        Err(PersistenceError::SerializationError(_))
    ));
}
