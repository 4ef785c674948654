// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! View boundary for the production calendar.
//!
//! Views never touch the order manager's internals: they call the handlers
//! in this crate with plain strings and receive serializable responses or an
//! [`ApiError`] carrying a human-readable message.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    clear_filters, create_order, drop_order, get_calendar, get_view_state, hover_order,
    list_conflicts, list_orders, move_order, navigate, select_order, set_view_date,
    set_view_mode, toggle_filter, update_order,
};
pub use request_response::{
    CalendarDay, CalendarResponse, ConflictInfo, CreateOrderRequest, ListOrdersResponse,
    NavigateAction, OrderChip, OrderInfo, UpdateOrderRequest, ViewStateResponse,
};
