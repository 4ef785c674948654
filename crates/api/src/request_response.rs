// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates cross this boundary as `YYYY-MM-DD` strings and statuses as their
//! snake-case names.

use prodcal_domain::ProductionOrder;
use serde::{Deserialize, Serialize};

/// API request to create an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Area label or key.
    pub area: String,
    /// Optional assignee name.
    #[serde(default)]
    pub assignee: Option<String>,
    /// First day (ISO 8601).
    pub start: String,
    /// Last day, inclusive (ISO 8601).
    pub end: String,
    /// Status name.
    pub status: String,
    /// Explicit progress; defaults from the status when absent.
    #[serde(default)]
    pub progress: Option<u8>,
}

/// API request to patch an order. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    /// New area label or key. The order takes the new area's color.
    #[serde(default)]
    pub area: Option<String>,
    /// New assignee.
    #[serde(default)]
    pub assignee: Option<String>,
    /// Removes the assignee. Takes precedence over `assignee`.
    #[serde(default)]
    pub clear_assignee: bool,
    /// New first day (ISO 8601).
    #[serde(default)]
    pub start: Option<String>,
    /// New last day (ISO 8601).
    #[serde(default)]
    pub end: Option<String>,
    /// New status name.
    #[serde(default)]
    pub status: Option<String>,
    /// New progress.
    #[serde(default)]
    pub progress: Option<u8>,
}

/// Calendar navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigateAction {
    /// One step back.
    Prev,
    /// One step forward.
    Next,
    /// Back to today.
    Today,
}

/// An order as presented to views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    /// Order identifier.
    pub id: String,
    /// Area label.
    pub area: String,
    /// Assignee, if any.
    pub assignee: Option<String>,
    /// First day.
    pub start: String,
    /// Last day (inclusive).
    pub end: String,
    /// Status name.
    pub status: String,
    /// Human-readable status.
    pub status_label: String,
    /// Color token.
    pub color: String,
    /// Completion percentage.
    pub progress: u8,
    /// Scheduled days, counting both endpoints.
    pub duration_days: i64,
}

impl From<&ProductionOrder> for OrderInfo {
    fn from(order: &ProductionOrder) -> Self {
        Self {
            id: order.id.value().to_string(),
            area: order.area.clone(),
            assignee: order.assignee.clone(),
            start: order.start.to_string(),
            end: order.end.to_string(),
            status: order.status.as_str().to_string(),
            status_label: order.status.label().to_string(),
            color: order.color.clone(),
            progress: order.progress,
            duration_days: order.duration_days(),
        }
    }
}

/// API response listing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOrdersResponse {
    /// Orders in display order.
    pub orders: Vec<OrderInfo>,
    /// Number of orders returned.
    pub count: usize,
    /// Number of orders held, regardless of filters.
    pub total: usize,
}

/// A compact order marker shown inside a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChip {
    /// Order identifier.
    pub id: String,
    /// First six characters of the identifier, upper-cased.
    pub label: String,
    /// Area label.
    pub area: String,
    /// Status name.
    pub status: String,
    /// Color token.
    pub color: String,
    /// Whether this order is hovered.
    pub hovered: bool,
    /// Whether this order is selected.
    pub selected: bool,
}

/// One day cell of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The day (ISO 8601).
    pub date: String,
    /// Whether the day belongs to the month of the view date.
    pub in_view_month: bool,
    /// Whether the day is today.
    pub is_today: bool,
    /// Visible orders scheduled on the day.
    pub orders: Vec<OrderChip>,
}

/// API response describing the visible calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// Anchor date (ISO 8601).
    pub view_date: String,
    /// `month` or `week`.
    pub view_mode: String,
    /// Rows of seven days, Sunday first.
    pub weeks: Vec<Vec<CalendarDay>>,
}

/// API response describing the view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStateResponse {
    /// Anchor date (ISO 8601).
    pub view_date: String,
    /// `month` or `week`.
    pub view_mode: String,
    /// Visible status names.
    pub filters: Vec<String>,
    /// Hovered order, if any.
    pub hovered_id: Option<String>,
    /// Selected order, if any.
    pub selected_id: Option<String>,
    /// `None` while storage is healthy, otherwise the last write failure.
    pub persistence_degraded: Option<String>,
}

/// A pair of orders in the same area with overlapping dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictInfo {
    /// The earlier order in list order.
    pub first: String,
    /// The later order in list order.
    pub second: String,
}
