// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ephemeral calendar view state.
//!
//! None of this is persisted; it resets on every startup.

use prodcal_domain::{DomainError, OrderId, OrderStatus, ViewMode, calendar_weeks, shift_days};
use std::collections::BTreeSet;
use time::Date;

/// Direction of a previous/next navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards earlier dates.
    Previous,
    /// Towards later dates.
    Next,
}

/// What the calendar is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Anchor date of the visible window.
    pub view_date: Date,
    /// Month or week display.
    pub view_mode: ViewMode,
    /// Statuses currently shown.
    pub filters: BTreeSet<OrderStatus>,
    /// The order under the pointer, if any.
    pub hovered_id: Option<OrderId>,
    /// The order picked in the side list, if any.
    pub selected_id: Option<OrderId>,
}

impl ViewState {
    /// Month view anchored on `today`, every status visible, nothing hovered or selected.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            view_date: today,
            view_mode: ViewMode::Month,
            filters: OrderStatus::ALL.into_iter().collect(),
            hovered_id: None,
            selected_id: None,
        }
    }

    /// Adds `status` to the visible set, or removes it if present.
    pub fn toggle_filter(&mut self, status: OrderStatus) {
        if !self.filters.remove(&status) {
            self.filters.insert(status);
        }
    }

    /// Hides every status.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Checks whether orders with `status` are shown.
    #[must_use]
    pub fn is_visible(&self, status: OrderStatus) -> bool {
        self.filters.contains(&status)
    }

    /// Moves the view date one step in `direction` for the current mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the new date is not representable; the view date is unchanged.
    pub fn step(&mut self, direction: Direction) -> Result<Date, DomainError> {
        let days: i64 = self.view_mode.navigation_step_days();
        let delta: i64 = match direction {
            Direction::Previous => -days,
            Direction::Next => days,
        };
        self.view_date = shift_days(self.view_date, delta)?;
        Ok(self.view_date)
    }

    /// Rows of days for the current date and mode.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows near the ends of the calendar.
    pub fn weeks(&self) -> Result<Vec<Vec<Date>>, DomainError> {
        calendar_weeks(self.view_date, self.view_mode)
    }
}
