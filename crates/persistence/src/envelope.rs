// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Versioned payload format for the stored order list.
//!
//! ## Layout
//!
//! The current format (version 2) is a JSON object:
//!
//! ```json
//! {"version": 2, "orders": [ ... ]}
//! ```
//!
//! Version 1 payloads are a bare JSON array of orders. Older payloads are
//! upgraded one version at a time through [`PAYLOAD_MIGRATIONS`] before
//! being decoded; payloads newer than [`CURRENT_VERSION`] are rejected.

use prodcal_domain::ProductionOrder;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::PersistenceError;

/// Key holding the current-format payload.
pub const STORAGE_KEY: &str = "production-orders";

/// Key under which version 1 payloads were written.
pub const LEGACY_STORAGE_KEY: &str = "production-orders-v1";

/// Key receiving a copy of any payload that failed to decode.
pub const QUARANTINE_KEY: &str = "production-orders-unreadable";

/// Format version written by [`encode_orders`].
pub const CURRENT_VERSION: u64 = 2;

/// Upgrades a payload from the keyed version to the next one.
type PayloadMigration = fn(Value) -> Result<Value, PersistenceError>;

/// Upgrade steps, keyed by the version they upgrade from.
pub const PAYLOAD_MIGRATIONS: &[(u64, PayloadMigration)] = &[(1, migrate_v1_to_v2)];

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u64,
    orders: &'a [ProductionOrder],
}

#[derive(Deserialize)]
struct Envelope {
    orders: Vec<ProductionOrder>,
}

/// Serializes `orders` in the current format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_orders(orders: &[ProductionOrder]) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(&EnvelopeRef {
        version: CURRENT_VERSION,
        orders,
    })?)
}

/// Decodes a payload of any supported version.
///
/// # Errors
///
/// Returns an error if:
/// - The payload is not valid JSON or does not describe an order list
/// - The payload version is newer than [`CURRENT_VERSION`] or has no upgrade path
pub fn decode_payload(payload: &str) -> Result<Vec<ProductionOrder>, PersistenceError> {
    let value: Value = serde_json::from_str(payload)?;
    let version: u64 = payload_version(&value)?;
    let upgraded: Value = upgrade(version, value)?;
    let envelope: Envelope = serde_json::from_value(upgraded)?;
    Ok(envelope.orders)
}

/// Determines the format version of a parsed payload.
///
/// # Errors
///
/// Returns an error if the payload is neither an array nor a versioned object.
pub fn payload_version(value: &Value) -> Result<u64, PersistenceError> {
    match value {
        Value::Array(_) => Ok(1),
        Value::Object(map) => map.get("version").and_then(Value::as_u64).ok_or_else(|| {
            PersistenceError::SerializationError(
                "Payload object has no numeric version".to_string(),
            )
        }),
        _ => Err(PersistenceError::SerializationError(
            "Payload is neither an order list nor an envelope".to_string(),
        )),
    }
}

fn upgrade(mut version: u64, mut value: Value) -> Result<Value, PersistenceError> {
    if version > CURRENT_VERSION {
        return Err(PersistenceError::UnsupportedVersion(version));
    }
    while version < CURRENT_VERSION {
        let Some((_, migration)) = PAYLOAD_MIGRATIONS.iter().find(|(from, _)| *from == version)
        else {
            return Err(PersistenceError::UnsupportedVersion(version));
        };
        value = migration(value)?;
        debug!(from = version, to = version + 1, "Upgraded order payload");
        version += 1;
    }
    Ok(value)
}

fn migrate_v1_to_v2(value: Value) -> Result<Value, PersistenceError> {
    Ok(json!({ "version": 2, "orders": value }))
}
