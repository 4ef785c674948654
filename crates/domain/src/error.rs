// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DateRange, OrderId};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested range overlaps an existing order in the same area.
    Overlap {
        /// The area label.
        area: String,
        /// The range that was requested.
        requested: DateRange,
        /// The order already occupying part of the range.
        conflicting_id: OrderId,
    },
    /// No order carries the given identifier.
    OrderNotFound(OrderId),
    /// The end date precedes the start date.
    InvalidDateRange {
        /// The requested first day.
        start: time::Date,
        /// The requested last day.
        end: time::Date,
    },
    /// Progress is outside `[0, 100]`.
    InvalidProgress {
        /// The rejected value.
        value: u8,
    },
    /// Status string is not one of the known statuses.
    InvalidStatus(String),
    /// View mode string is not `month` or `week`.
    InvalidViewMode(String),
    /// No configured area matches the given label or key.
    AreaNotFound(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overlap {
                area,
                requested,
                conflicting_id,
            } => {
                write!(
                    f,
                    "Overlapping order in the same area and dates: {requested} in '{area}' conflicts with order {conflicting_id}"
                )
            }
            Self::OrderNotFound(id) => write!(f, "Order not found: {id}"),
            Self::InvalidDateRange { start, end } => {
                write!(
                    f,
                    "End date must be after start date: {end} is before {start}"
                )
            }
            Self::InvalidProgress { value } => {
                write!(f, "Invalid progress: {value}. Must be between 0 and 100")
            }
            Self::InvalidStatus(value) => write!(f, "Invalid status: {value}"),
            Self::InvalidViewMode(value) => write!(f, "Invalid view mode: {value}"),
            Self::AreaNotFound(name) => write!(f, "Area '{name}' not found"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
