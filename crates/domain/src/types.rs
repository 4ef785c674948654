// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Duration};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// The default assignee roster offered when creating orders.
pub const DEFAULT_ASSIGNEES: [&str; 5] = [
    "Alex Kim",
    "Jordan Lee",
    "Sam Patel",
    "Taylor Quinn",
    "Morgan Yu",
];

/// Represents an order identifier.
///
/// Identifiers are opaque, assigned once at creation and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wraps an existing identifier value.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Generates a fresh identifier from 32 random bits, rendered as 8 hex characters.
    ///
    /// Uniqueness against an existing order list is the caller's concern.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("{:08x}", rand::random::<u32>()))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the short upper-case label shown on calendar chips.
    #[must_use]
    pub fn short_label(&self) -> String {
        self.0.chars().take(6).collect::<String>().to_uppercase()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The lifecycle status of a production order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Scheduled but not started.
    Planned,
    /// Work has started.
    InProgress,
    /// Work is finished.
    Completed,
    /// The order will not be produced.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in filter menu order.
    pub const ALL: [Self; 4] = [
        Self::Completed,
        Self::InProgress,
        Self::Cancelled,
        Self::Planned,
    ];

    /// Returns the wire representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the human-readable label for this status.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns the progress an order starts with when none is given.
    #[must_use]
    pub const fn default_progress(&self) -> u8 {
        match self {
            Self::Completed => 100,
            Self::Planned | Self::InProgress | Self::Cancelled => 0,
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configured production area.
///
/// Areas are fixed at startup and are not mutable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaConfig {
    /// Short key (e.g. "A").
    pub key: String,
    /// Display label; orders reference their area by this label.
    pub label: String,
    /// Name of the CSS custom property holding the area color.
    pub color_var: String,
}

impl AreaConfig {
    /// Creates a new area configuration entry.
    #[must_use]
    pub fn new(key: &str, label: &str, color_var: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            color_var: color_var.to_string(),
        }
    }

    /// Returns the color token an order snapshots when it is created in this area.
    #[must_use]
    pub fn color(&self) -> String {
        format!("hsl(var({}))", self.color_var)
    }

    /// Checks whether `name` refers to this area by label or key.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.label == name || self.key == name
    }
}

/// Returns the standard four production areas.
#[must_use]
pub fn default_areas() -> Vec<AreaConfig> {
    vec![
        AreaConfig::new("A", "Area A", "--area-a"),
        AreaConfig::new("B", "Area B", "--area-b"),
        AreaConfig::new("C", "Area C", "--area-c"),
        AreaConfig::new("D", "Area D", "--area-d"),
    ]
}

/// Returns the default assignee roster as owned strings.
#[must_use]
pub fn default_assignees() -> Vec<String> {
    DEFAULT_ASSIGNEES.iter().map(ToString::to_string).collect()
}

/// An inclusive range of calendar days.
///
/// `end >= start` is not enforced by construction; use
/// [`crate::validate_date_range`] where the ordering matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// First day of the range.
    pub start: Date,
    /// Last day of the range (inclusive).
    pub end: Date,
}

impl DateRange {
    /// Creates a range without checking its ordering.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Closed-interval overlap test. Ranges that share a boundary day overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Checks whether `day` falls inside the range.
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days covered, counting both endpoints.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).whole_days() + 1
    }

    /// Shifts both endpoints by `days`, preserving the span.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint leaves the representable date range.
    pub fn shifted(&self, days: i64) -> Result<Self, DomainError> {
        let shift = |date: Date| {
            date.checked_add(Duration::days(days))
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: format!("shifting {date} by {days} days"),
                })
        };
        Ok(Self {
            start: shift(self.start)?,
            end: shift(self.end)?,
        })
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// A scheduled production task occupying an inclusive date range in one area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionOrder {
    /// Unique, immutable identifier.
    pub id: OrderId,
    /// Label of the area the order is scheduled in.
    pub area: String,
    /// Optional free-form assignee name.
    #[serde(default)]
    pub assignee: Option<String>,
    /// First scheduled day.
    #[serde(with = "iso_date")]
    pub start: Date,
    /// Last scheduled day (inclusive).
    #[serde(with = "iso_date")]
    pub end: Date,
    /// Current status.
    pub status: OrderStatus,
    /// Color token captured from the area when the order was created.
    ///
    /// This is a snapshot: later changes to the area's color do not
    /// propagate to existing orders.
    pub color: String,
    /// Completion percentage in `[0, 100]`.
    pub progress: u8,
}

impl ProductionOrder {
    /// Returns the scheduled range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }

    /// Number of scheduled days, counting both endpoints.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        self.range().duration_days()
    }
}

/// Input for creating an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// Area label.
    pub area: String,
    /// Optional assignee.
    pub assignee: Option<String>,
    /// First scheduled day.
    pub start: Date,
    /// Last scheduled day (inclusive). Must not precede `start`; not checked here.
    pub end: Date,
    /// Initial status.
    pub status: OrderStatus,
    /// Color token, normally [`AreaConfig::color`] of the chosen area.
    pub color: String,
    /// Explicit progress; defaults from the status when absent.
    pub progress: Option<u8>,
}

impl NewOrder {
    /// Returns the requested range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }

    /// Progress the created order will carry.
    #[must_use]
    pub fn effective_progress(&self) -> u8 {
        self.progress
            .unwrap_or_else(|| self.status.default_progress())
    }

    /// Materializes the order under the given identifier.
    #[must_use]
    pub fn into_order(self, id: OrderId) -> ProductionOrder {
        let progress: u8 = self.effective_progress();
        ProductionOrder {
            id,
            area: self.area,
            assignee: self.assignee,
            start: self.start,
            end: self.end,
            status: self.status,
            color: self.color,
            progress,
        }
    }
}

/// A partial update to an order. Absent fields are left unchanged.
///
/// `assignee` is doubly optional so a patch can clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderPatch {
    /// New area label.
    pub area: Option<String>,
    /// New assignee, or `Some(None)` to clear it.
    pub assignee: Option<Option<String>>,
    /// New first day.
    pub start: Option<Date>,
    /// New last day.
    pub end: Option<Date>,
    /// New status.
    pub status: Option<OrderStatus>,
    /// New color token.
    pub color: Option<String>,
    /// New progress.
    pub progress: Option<u8>,
}

impl OrderPatch {
    /// Checks whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.area.is_none()
            && self.assignee.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.status.is_none()
            && self.color.is_none()
            && self.progress.is_none()
    }

    /// Checks whether the patch touches the fields the overlap rule depends on.
    #[must_use]
    pub const fn touches_schedule(&self) -> bool {
        self.area.is_some() || self.start.is_some() || self.end.is_some()
    }

    /// Merges the patch into `order`.
    pub fn apply_to(&self, order: &mut ProductionOrder) {
        if let Some(area) = &self.area {
            order.area.clone_from(area);
        }
        if let Some(assignee) = &self.assignee {
            order.assignee.clone_from(assignee);
        }
        if let Some(start) = self.start {
            order.start = start;
        }
        if let Some(end) = self.end {
            order.end = end;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(color) = &self.color {
            order.color.clone_from(color);
        }
        if let Some(progress) = self.progress {
            order.progress = progress;
        }
    }
}
