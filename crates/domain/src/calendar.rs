// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar arithmetic for the month and week views.
//!
//! Weeks start on Sunday. Every function here is pure and works on
//! day-granular `time::Date` values with no timezone.
//!
//! ## Invariants
//!
//! - A week row always holds exactly 7 consecutive days
//! - A month matrix covers the whole month, padded to full weeks
//! - Navigation steps are fixed: 30 days in month view, 7 in week view

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Duration};

/// Display granularity of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// A whole month, padded to full weeks.
    #[default]
    Month,
    /// A single Sunday-started week.
    Week,
}

impl ViewMode {
    /// Returns the wire representation of this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
        }
    }

    /// Days the view date moves per previous/next step.
    #[must_use]
    pub const fn navigation_step_days(&self) -> i64 {
        match self {
            Self::Month => 30,
            Self::Week => 7,
        }
    }
}

impl FromStr for ViewMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            _ => Err(DomainError::InvalidViewMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shifts `date` by `days` calendar days.
///
/// # Errors
///
/// Returns an error if the result is not representable.
pub fn shift_days(date: Date, days: i64) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("shifting {date} by {days} days"),
        })
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
#[must_use]
pub fn day_delta(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}

/// Returns the Sunday on or before `date`.
///
/// # Errors
///
/// Returns an error if the result is not representable.
pub fn start_of_week(date: Date) -> Result<Date, DomainError> {
    let offset: i64 = i64::from(date.weekday().number_days_from_sunday());
    shift_days(date, -offset)
}

/// Returns the Saturday on or after `date`.
///
/// # Errors
///
/// Returns an error if the result is not representable.
pub fn end_of_week(date: Date) -> Result<Date, DomainError> {
    shift_days(start_of_week(date)?, 6)
}

/// Returns the first day of the month containing `date`.
///
/// # Errors
///
/// Returns an error if the result is not representable.
pub fn start_of_month(date: Date) -> Result<Date, DomainError> {
    date.replace_day(1)
        .map_err(|e| DomainError::DateArithmeticOverflow {
            operation: format!("finding the start of the month of {date}: {e}"),
        })
}

/// Returns the last day of the month containing `date`.
///
/// # Errors
///
/// Returns an error if the result is not representable.
pub fn end_of_month(date: Date) -> Result<Date, DomainError> {
    // 31 days past the 1st always lands in the following month
    let next_month: Date = shift_days(start_of_month(date)?, 31)?;
    shift_days(start_of_month(next_month)?, -1)
}

/// Builds the 7-day week rows of the month containing `view_date`.
///
/// The first row starts on the Sunday on or before the 1st; the last row
/// ends on the Saturday on or after the last day of the month.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows.
pub fn month_matrix(view_date: Date) -> Result<Vec<Vec<Date>>, DomainError> {
    let first: Date = start_of_week(start_of_month(view_date)?)?;
    let last: Date = end_of_week(end_of_month(view_date)?)?;

    let mut weeks: Vec<Vec<Date>> = Vec::new();
    let mut day: Date = first;
    while day <= last {
        weeks.push(week_starting(day)?);
        day = shift_days(day, 7)?;
    }
    Ok(weeks)
}

/// Builds the single week row containing `view_date`.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows.
pub fn week_row(view_date: Date) -> Result<Vec<Vec<Date>>, DomainError> {
    Ok(vec![week_starting(start_of_week(view_date)?)?])
}

/// Builds the rows shown for `view_date` in `mode`.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows.
pub fn calendar_weeks(view_date: Date, mode: ViewMode) -> Result<Vec<Vec<Date>>, DomainError> {
    match mode {
        ViewMode::Month => month_matrix(view_date),
        ViewMode::Week => week_row(view_date),
    }
}

fn week_starting(first: Date) -> Result<Vec<Date>, DomainError> {
    (0..7).map(|offset| shift_days(first, offset)).collect()
}
