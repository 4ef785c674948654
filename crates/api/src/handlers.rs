// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handlers the views call.
//!
//! Each handler parses and validates its string inputs, calls one manager
//! operation and renders the result as a response DTO. Every failure is
//! returned as an [`ApiError`].

use prodcal::{Clock, OrderManager, OrderRepository, PersistenceHealth, ViewState};
use prodcal_domain::{
    AreaConfig, DateRange, NewOrder, OrderId, OrderPatch, OrderStatus, ProductionOrder,
    ViewMode, parse_iso_date, validate_date_range, validate_progress,
};
use time::Date;
use tracing::debug;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CalendarDay, CalendarResponse, ConflictInfo, CreateOrderRequest, ListOrdersResponse,
    NavigateAction, OrderChip, OrderInfo, UpdateOrderRequest, ViewStateResponse,
};

// ============================================================================
// Input parsing
// ============================================================================

fn parse_date_field(field: &str, value: &str) -> Result<Date, ApiError> {
    parse_iso_date(value).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: e.to_string(),
    })
}

fn parse_status(value: &str) -> Result<OrderStatus, ApiError> {
    value.trim().parse().map_err(translate_domain_error)
}

fn parse_progress(value: Option<u8>) -> Result<Option<u8>, ApiError> {
    value
        .map(validate_progress)
        .transpose()
        .map_err(translate_domain_error)
}

fn normalize_assignee(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
}

fn resolve_area<R: OrderRepository, C: Clock>(
    manager: &OrderManager<R, C>,
    name: &str,
) -> Result<AreaConfig, ApiError> {
    manager
        .config()
        .find_area(name.trim())
        .cloned()
        .map_err(translate_domain_error)
}

fn existing_order<'a, R: OrderRepository, C: Clock>(
    manager: &'a OrderManager<R, C>,
    order_id: &OrderId,
) -> Result<&'a ProductionOrder, ApiError> {
    manager.order(order_id).ok_or_else(|| ApiError::ResourceNotFound {
        resource_type: String::from("Order"),
        message: format!("Order {order_id} does not exist"),
    })
}

// ============================================================================
// Orders
// ============================================================================

/// Creates an order via the API boundary.
///
/// The area may be given by label or key; the order is stored under the
/// area's label and takes the area's current color.
///
/// # Errors
///
/// Returns an error if:
/// - A date is not `YYYY-MM-DD`, or the end date precedes the start date
/// - The area is not configured
/// - The status is unknown or the progress exceeds 100
/// - The order would overlap another order in its area
pub fn create_order<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    request: &CreateOrderRequest,
) -> Result<OrderInfo, ApiError> {
    let start: Date = parse_date_field("start", &request.start)?;
    let end: Date = parse_date_field("end", &request.end)?;
    validate_date_range(start, end).map_err(translate_domain_error)?;

    let area: AreaConfig = resolve_area(manager, &request.area)?;
    let status: OrderStatus = parse_status(&request.status)?;
    let progress: Option<u8> = parse_progress(request.progress)?;

    let input: NewOrder = NewOrder {
        color: area.color(),
        area: area.label,
        assignee: normalize_assignee(request.assignee.as_deref()),
        start,
        end,
        status,
        progress,
    };

    let order: ProductionOrder = manager.create(input).map_err(translate_core_error)?;
    Ok(OrderInfo::from(&order))
}

/// Shifts an order by a whole number of days.
///
/// # Errors
///
/// Returns an error if the order does not exist or the shifted dates overlap
/// another order in its area.
pub fn move_order<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    order_id: &str,
    day_delta: i64,
) -> Result<OrderInfo, ApiError> {
    let order_id: OrderId = OrderId::new(order_id.trim());
    manager
        .move_order(&order_id, day_delta)
        .map_err(translate_core_error)?;
    Ok(OrderInfo::from(existing_order(manager, &order_id)?))
}

/// Reschedules an order to start on `target_day`, keeping its length.
///
/// # Errors
///
/// Returns an error if the date is malformed, the order does not exist, or
/// the new dates overlap another order in its area.
pub fn drop_order<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    order_id: &str,
    target_day: &str,
) -> Result<OrderInfo, ApiError> {
    let target_day: Date = parse_date_field("date", target_day)?;
    let order_id: OrderId = OrderId::new(order_id.trim());
    manager
        .drop_on_day(&order_id, target_day)
        .map_err(translate_core_error)?;
    Ok(OrderInfo::from(existing_order(manager, &order_id)?))
}

/// Applies a partial update to an order.
///
/// Fields are parsed and validated individually. The resulting dates must
/// be ordered, with a missing date taken from the stored order. Overlaps
/// with other orders are not checked.
///
/// # Errors
///
/// Returns an error if a field is invalid or the order does not exist.
pub fn update_order<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    order_id: &str,
    request: &UpdateOrderRequest,
) -> Result<OrderInfo, ApiError> {
    let order_id: OrderId = OrderId::new(order_id.trim());
    let current: DateRange = existing_order(manager, &order_id)?.range();

    let start: Option<Date> = request
        .start
        .as_deref()
        .map(|value| parse_date_field("start", value))
        .transpose()?;
    let end: Option<Date> = request
        .end
        .as_deref()
        .map(|value| parse_date_field("end", value))
        .transpose()?;
    if start.is_some() || end.is_some() {
        // A lone date is checked against the order's stored counterpart
        validate_date_range(start.unwrap_or(current.start), end.unwrap_or(current.end))
            .map_err(translate_domain_error)?;
    }

    let area: Option<AreaConfig> = request
        .area
        .as_deref()
        .map(|name| resolve_area(manager, name))
        .transpose()?;

    let assignee: Option<Option<String>> = if request.clear_assignee {
        Some(None)
    } else {
        request
            .assignee
            .as_deref()
            .map(|name| normalize_assignee(Some(name)))
    };

    let patch: OrderPatch = OrderPatch {
        color: area.as_ref().map(AreaConfig::color),
        area: area.map(|area| area.label),
        assignee,
        start,
        end,
        status: request.status.as_deref().map(parse_status).transpose()?,
        progress: parse_progress(request.progress)?,
    };

    if patch.is_empty() {
        debug!(order_id = %order_id, "Empty update request");
    } else if !manager.update(&order_id, patch) {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Order"),
            message: format!("Order {order_id} does not exist"),
        });
    }

    Ok(OrderInfo::from(existing_order(manager, &order_id)?))
}

/// Lists orders in display order, optionally only those passing the filters.
#[must_use]
pub fn list_orders<R: OrderRepository, C: Clock>(
    manager: &OrderManager<R, C>,
    visible_only: bool,
) -> ListOrdersResponse {
    let orders: Vec<OrderInfo> = if visible_only {
        manager
            .visible_orders()
            .into_iter()
            .map(OrderInfo::from)
            .collect()
    } else {
        manager.orders().iter().map(OrderInfo::from).collect()
    };

    ListOrdersResponse {
        count: orders.len(),
        total: manager.orders().len(),
        orders,
    }
}

/// Lists every pair of orders that currently overlap within an area.
#[must_use]
pub fn list_conflicts<R: OrderRepository, C: Clock>(
    manager: &OrderManager<R, C>,
) -> Vec<ConflictInfo> {
    manager
        .find_conflicts()
        .into_iter()
        .map(|(first, second)| ConflictInfo {
            first: first.value().to_string(),
            second: second.value().to_string(),
        })
        .collect()
}

// ============================================================================
// Calendar and view state
// ============================================================================

/// Renders the visible calendar.
///
/// # Errors
///
/// Returns an error if the view date is too close to the ends of the
/// representable calendar.
pub fn get_calendar<R: OrderRepository, C: Clock>(
    manager: &OrderManager<R, C>,
) -> Result<CalendarResponse, ApiError> {
    let view_date: Date = manager.view_date();
    let today: Date = manager.today();
    let weeks: Vec<Vec<Date>> = manager.calendar_weeks().map_err(translate_core_error)?;

    let weeks: Vec<Vec<CalendarDay>> = weeks
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|day| CalendarDay {
                    date: day.to_string(),
                    in_view_month: day.year() == view_date.year()
                        && day.month() == view_date.month(),
                    is_today: day == today,
                    orders: manager
                        .orders_on(day)
                        .into_iter()
                        .map(|order| order_chip(manager, order))
                        .collect(),
                })
                .collect()
        })
        .collect();

    Ok(CalendarResponse {
        view_date: view_date.to_string(),
        view_mode: manager.view_mode().as_str().to_string(),
        weeks,
    })
}

fn order_chip<R: OrderRepository, C: Clock>(
    manager: &OrderManager<R, C>,
    order: &ProductionOrder,
) -> OrderChip {
    OrderChip {
        id: order.id.value().to_string(),
        label: order.id.short_label(),
        area: order.area.clone(),
        status: order.status.as_str().to_string(),
        color: order.color.clone(),
        hovered: manager.hovered_id() == Some(&order.id),
        selected: manager.selected_id() == Some(&order.id),
    }
}

/// Returns the current view state.
#[must_use]
pub fn get_view_state<R: OrderRepository, C: Clock>(
    manager: &OrderManager<R, C>,
) -> ViewStateResponse {
    let view: &ViewState = manager.view();
    ViewStateResponse {
        view_date: view.view_date.to_string(),
        view_mode: view.view_mode.as_str().to_string(),
        filters: view
            .filters
            .iter()
            .map(|status| status.as_str().to_string())
            .collect(),
        hovered_id: view.hovered_id.as_ref().map(|id| id.value().to_string()),
        selected_id: view.selected_id.as_ref().map(|id| id.value().to_string()),
        persistence_degraded: match manager.persistence_health() {
            PersistenceHealth::Healthy => None,
            PersistenceHealth::Degraded { reason } => Some(reason.clone()),
        },
    }
}

/// Shows or hides orders with the given status.
///
/// # Errors
///
/// Returns an error if the status is unknown.
pub fn toggle_filter<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    status: &str,
) -> Result<ViewStateResponse, ApiError> {
    let status: OrderStatus = parse_status(status)?;
    manager.toggle_filter(status);
    Ok(get_view_state(manager))
}

/// Hides every status.
pub fn clear_filters<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
) -> ViewStateResponse {
    manager.clear_filters();
    get_view_state(manager)
}

/// Moves the calendar one step, or back to today.
pub fn navigate<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    action: NavigateAction,
) -> ViewStateResponse {
    match action {
        NavigateAction::Prev => manager.goto_prev(),
        NavigateAction::Next => manager.goto_next(),
        NavigateAction::Today => manager.goto_this_month(),
    }
    get_view_state(manager)
}

/// Switches between month and week display.
///
/// # Errors
///
/// Returns an error if the mode is neither `month` nor `week`.
pub fn set_view_mode<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    mode: &str,
) -> Result<ViewStateResponse, ApiError> {
    let mode: ViewMode = mode.trim().parse().map_err(translate_domain_error)?;
    manager.set_view_mode(mode);
    Ok(get_view_state(manager))
}

/// Moves the calendar to an arbitrary date.
///
/// # Errors
///
/// Returns an error if the date is not `YYYY-MM-DD`.
pub fn set_view_date<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    date: &str,
) -> Result<ViewStateResponse, ApiError> {
    let date: Date = parse_date_field("view_date", date)?;
    manager.set_view_date(date);
    Ok(get_view_state(manager))
}

/// Selects an order, or clears the selection with `None`.
///
/// # Errors
///
/// Returns an error if the order does not exist; the selection is unchanged.
pub fn select_order<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    order_id: Option<&str>,
) -> Result<ViewStateResponse, ApiError> {
    let order_id: Option<OrderId> = known_order_id(manager, order_id)?;
    manager.set_selected_id(order_id);
    Ok(get_view_state(manager))
}

/// Marks an order as hovered, or clears the hover with `None`.
///
/// # Errors
///
/// Returns an error if the order does not exist; the hover is unchanged.
pub fn hover_order<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    order_id: Option<&str>,
) -> Result<ViewStateResponse, ApiError> {
    let order_id: Option<OrderId> = known_order_id(manager, order_id)?;
    manager.set_hovered_id(order_id);
    Ok(get_view_state(manager))
}

fn known_order_id<R: OrderRepository, C: Clock>(
    manager: &OrderManager<R, C>,
    order_id: Option<&str>,
) -> Result<Option<OrderId>, ApiError> {
    order_id
        .map(|value| -> Result<OrderId, ApiError> {
            let id: OrderId = OrderId::new(value.trim());
            existing_order(manager, &id)?;
            Ok(id)
        })
        .transpose()
}
