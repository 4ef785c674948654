// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The order state manager.
//!
//! One explicitly constructed `OrderManager` owns the order list, the view
//! state and the repository. Consumers receive it by reference; every
//! mutation goes through the methods below.
//!
//! ## Invariants
//!
//! - No two orders in one area overlap after `create` or `move_order`
//! - A failed command leaves both the order list and storage untouched
//! - The full order list is written after every successful mutation
//! - `hovered_id` and `selected_id` only ever name existing orders

use crate::apply::{apply, apply_create};
use crate::clock::Clock;
use crate::command::Command;
use crate::config::SchedulerConfig;
use crate::error::CoreError;
use crate::repository::OrderRepository;
use crate::state::{OrderBook, PersistenceHealth, TransitionOutcome, TransitionResult};
use crate::view::{Direction, ViewState};
use prodcal_domain::{
    AreaConfig, DomainError, NewOrder, OrderId, OrderPatch, OrderStatus, ProductionOrder,
    ViewMode, day_delta, find_conflicts, find_overlap, seed_orders,
};
use time::Date;
use tracing::{debug, error, info, warn};

/// Owns the canonical order list and the calendar view state.
pub struct OrderManager<R: OrderRepository, C: Clock> {
    repository: R,
    clock: C,
    config: SchedulerConfig,
    book: OrderBook,
    view: ViewState,
    health: PersistenceHealth,
}

impl<R: OrderRepository, C: Clock> OrderManager<R, C> {
    /// Loads the stored order list, or seeds a sample list when there is none.
    ///
    /// Load and decode failures are logged and never returned to the caller.
    /// A seed for empty storage is written back immediately. A seed standing
    /// in for unreadable data is kept in memory only and the manager starts
    /// out [`PersistenceHealth::Degraded`], so the stored payload survives
    /// until the next mutation.
    pub fn initialize(mut repository: R, clock: C, config: SchedulerConfig) -> Self {
        let today: Date = clock.today();

        let mut health: PersistenceHealth = PersistenceHealth::Healthy;
        let loaded: Option<Vec<ProductionOrder>> = match repository.load() {
            Ok(orders) => orders,
            Err(e) => {
                warn!("Stored order data is unreadable; seeding in memory: {}", e);
                health = PersistenceHealth::Degraded {
                    reason: format!("stored orders unreadable: {e}"),
                };
                None
            }
        };

        let (orders, seeded) = if let Some(orders) = loaded {
            info!("Loaded {} orders from storage", orders.len());
            (orders, false)
        } else {
            let orders: Vec<ProductionOrder> =
                seed_orders(today, &config.areas, &config.assignees).unwrap_or_else(|e| {
                    error!("Failed to build seed orders: {}", e);
                    Vec::new()
                });
            info!("Seeded {} sample orders anchored at {}", orders.len(), today);
            (orders, true)
        };

        let mut manager: Self = Self {
            repository,
            clock,
            config,
            book: OrderBook::from_orders(orders),
            view: ViewState::new(today),
            health,
        };

        for (first, second) in manager.find_conflicts() {
            warn!(%first, %second, "Stored orders overlap in the same area");
        }

        if seeded && !manager.health.is_degraded() {
            manager.persist();
        }
        manager
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// All orders in display order (most recently created first).
    #[must_use]
    pub fn orders(&self) -> &[ProductionOrder] {
        &self.book.orders
    }

    /// Looks up an order by identifier.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<&ProductionOrder> {
        self.book.find(id)
    }

    /// Configured areas.
    #[must_use]
    pub fn areas(&self) -> &[AreaConfig] {
        &self.config.areas
    }

    /// Configured assignee names.
    #[must_use]
    pub fn assignees(&self) -> &[String] {
        &self.config.assignees
    }

    /// The reference configuration.
    #[must_use]
    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// The full view state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Anchor date of the visible calendar window.
    #[must_use]
    pub const fn view_date(&self) -> Date {
        self.view.view_date
    }

    /// Current view mode.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view.view_mode
    }

    /// The hovered order, if any.
    #[must_use]
    pub const fn hovered_id(&self) -> Option<&OrderId> {
        self.view.hovered_id.as_ref()
    }

    /// The selected order, if any.
    #[must_use]
    pub const fn selected_id(&self) -> Option<&OrderId> {
        self.view.selected_id.as_ref()
    }

    /// Result of the most recent storage write.
    #[must_use]
    pub const fn persistence_health(&self) -> &PersistenceHealth {
        &self.health
    }

    /// Today's date according to the manager's clock.
    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// Orders whose status passes the active filters, in display order.
    #[must_use]
    pub fn visible_orders(&self) -> Vec<&ProductionOrder> {
        self.book
            .orders
            .iter()
            .filter(|order| self.view.is_visible(order.status))
            .collect()
    }

    /// Visible orders scheduled on `day`.
    #[must_use]
    pub fn orders_on(&self, day: Date) -> Vec<&ProductionOrder> {
        self.book
            .orders
            .iter()
            .filter(|order| self.view.is_visible(order.status) && order.range().contains(day))
            .collect()
    }

    /// Rows of days for the current view.
    ///
    /// # Errors
    ///
    /// Returns an error if date arithmetic overflows near the ends of the calendar.
    pub fn calendar_weeks(&self) -> Result<Vec<Vec<Date>>, CoreError> {
        Ok(self.view.weeks()?)
    }

    /// Every pair of orders currently violating the overlap rule.
    #[must_use]
    pub fn find_conflicts(&self) -> Vec<(OrderId, OrderId)> {
        find_conflicts(&self.book.orders)
    }

    /// Hands back the repository, consuming the manager.
    #[must_use]
    pub fn into_repository(self) -> R {
        self.repository
    }

    // ========================================================================
    // Order mutations
    // ========================================================================

    /// Creates an order, prepends it and persists the list.
    ///
    /// Progress defaults to 100 for completed orders and 0 otherwise.
    /// The caller must ensure `input.end >= input.start`; it is not checked here.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Overlap` if the range overlaps another order in
    /// the same area. Nothing is changed in that case.
    pub fn create(&mut self, input: NewOrder) -> Result<ProductionOrder, CoreError> {
        let order_id: OrderId = self.fresh_id();
        let (new_book, order) = apply_create(&self.book, order_id, input)
            .inspect_err(|e| debug!("Rejected order creation: {}", e))?;

        debug!(order_id = %order.id, area = %order.area, "Created order");
        self.commit(new_book);
        Ok(order)
    }

    /// Shifts an order's start and end by `day_delta` days and persists the list.
    ///
    /// Both dates move together or neither does.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No order has the identifier
    /// - The shifted range overlaps another order in the same area
    /// - The shifted dates are not representable
    pub fn move_order(&mut self, id: &OrderId, day_delta: i64) -> Result<(), CoreError> {
        let result: TransitionResult = apply(
            &self.book,
            Command::MoveOrder {
                order_id: id.clone(),
                day_delta,
            },
        )
        .inspect_err(|e| debug!(order_id = %id, day_delta, "Rejected move: {}", e))?;

        if let TransitionOutcome::Moved { from, to, .. } = &result.outcome {
            debug!(order_id = %id, %from, %to, "Moved order");
        }
        self.commit(result.new_book);
        Ok(())
    }

    /// Reschedules an order so that it starts on `target_day`.
    ///
    /// Dropping an order on its current start day changes nothing.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::move_order`].
    pub fn drop_on_day(&mut self, id: &OrderId, target_day: Date) -> Result<(), CoreError> {
        let Some(order) = self.book.find(id) else {
            return Err(CoreError::DomainViolation(DomainError::OrderNotFound(
                id.clone(),
            )));
        };
        let delta: i64 = day_delta(order.start, target_day);
        if delta == 0 {
            return Ok(());
        }
        self.move_order(id, delta)
    }

    /// Merges `patch` into the order with `id` and persists the list.
    ///
    /// No rule is enforced: dates, area and progress are taken as given.
    /// Returns `false` (and changes nothing) when no order has the identifier.
    pub fn update(&mut self, id: &OrderId, patch: OrderPatch) -> bool {
        let touches_schedule: bool = patch.touches_schedule();
        let result: TransitionResult = match apply(
            &self.book,
            Command::UpdateOrder {
                order_id: id.clone(),
                patch,
            },
        ) {
            Ok(result) => result,
            Err(e) => {
                debug!(order_id = %id, "Update failed: {}", e);
                return false;
            }
        };

        let updated: ProductionOrder = match &result.outcome {
            TransitionOutcome::Updated(order) => order.clone(),
            _ => {
                debug!(order_id = %id, "Ignoring update for unknown order");
                return false;
            }
        };

        if touches_schedule {
            if let Some(conflict) = find_overlap(
                &updated.area,
                &updated.range(),
                &result.new_book.orders,
                Some(&updated.id),
            ) {
                warn!(
                    order_id = %updated.id,
                    conflicting_id = %conflict.id,
                    "Update left overlapping orders in area '{}'",
                    updated.area
                );
            }
        }

        debug!(order_id = %id, "Updated order");
        self.commit(result.new_book);
        true
    }

    // ========================================================================
    // View state
    // ========================================================================

    /// Shows orders with `status` if hidden, hides them if shown.
    pub fn toggle_filter(&mut self, status: OrderStatus) {
        self.view.toggle_filter(status);
    }

    /// Hides every status.
    pub fn clear_filters(&mut self) {
        self.view.clear_filters();
    }

    /// Moves the view back 30 days (month) or 7 days (week).
    pub fn goto_prev(&mut self) {
        self.navigate(Direction::Previous);
    }

    /// Moves the view forward 30 days (month) or 7 days (week).
    pub fn goto_next(&mut self) {
        self.navigate(Direction::Next);
    }

    /// Resets the view date to today.
    pub fn goto_this_month(&mut self) {
        self.view.view_date = self.clock.today();
    }

    /// Switches between month and week display.
    pub const fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.view_mode = mode;
    }

    /// Moves the view to an arbitrary date.
    pub const fn set_view_date(&mut self, date: Date) {
        self.view.view_date = date;
    }

    /// Marks an order as hovered, or clears the hover with `None`.
    ///
    /// Unknown identifiers are ignored.
    pub fn set_hovered_id(&mut self, id: Option<OrderId>) {
        if let Some(id) = self.known(id) {
            self.view.hovered_id = id;
        }
    }

    /// Marks an order as selected, or clears the selection with `None`.
    ///
    /// Unknown identifiers are ignored.
    pub fn set_selected_id(&mut self, id: Option<OrderId>) {
        if let Some(id) = self.known(id) {
            self.view.selected_id = id;
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn navigate(&mut self, direction: Direction) {
        match self.view.step(direction) {
            Ok(date) => debug!(?direction, %date, "Navigated calendar"),
            Err(e) => warn!(?direction, "Calendar navigation out of range: {}", e),
        }
    }

    /// Filters a hover/selection target down to `None` or an existing order.
    ///
    /// Returns `None` when the target should be ignored.
    fn known(&self, id: Option<OrderId>) -> Option<Option<OrderId>> {
        match id {
            None => Some(None),
            Some(id) if self.book.contains(&id) => Some(Some(id)),
            Some(id) => {
                debug!(order_id = %id, "Ignoring reference to unknown order");
                None
            }
        }
    }

    fn fresh_id(&self) -> OrderId {
        let mut id: OrderId = OrderId::generate();
        while self.book.contains(&id) {
            id = OrderId::generate();
        }
        id
    }

    fn commit(&mut self, new_book: OrderBook) {
        self.book = new_book;
        self.persist();
    }

    fn persist(&mut self) {
        match self.repository.save(&self.book.orders) {
            Ok(()) => {
                if self.health.is_degraded() {
                    info!("Order storage recovered");
                }
                self.health = PersistenceHealth::Healthy;
            }
            Err(e) => {
                error!("Failed to persist {} orders: {}", self.book.len(), e);
                self.health = PersistenceHealth::Degraded {
                    reason: e.to_string(),
                };
            }
        }
    }
}
