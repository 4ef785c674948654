// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{OrderBook, TransitionOutcome, TransitionResult};
use prodcal_domain::{
    DateRange, DomainError, NewOrder, OrderId, ProductionOrder, validate_no_overlap,
};

/// Applies a command to the current order book, producing a new book.
///
/// The input book is never modified; a failed command leaves no trace.
///
/// # Arguments
///
/// * `book` - The current order book (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new book and what changed
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A created or moved order would overlap another order in its area
/// - A moved order does not exist
/// - Shifting an order's dates overflows
pub fn apply(book: &OrderBook, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateOrder { order_id, input } => {
            let (new_book, order) = apply_create(book, order_id, input)?;
            Ok(TransitionResult {
                new_book,
                outcome: TransitionOutcome::Created(order),
            })
        }
        Command::MoveOrder {
            order_id,
            day_delta,
        } => {
            let Some(order) = book.find(&order_id) else {
                return Err(CoreError::DomainViolation(DomainError::OrderNotFound(
                    order_id,
                )));
            };

            let from: DateRange = order.range();
            let to: DateRange = from.shifted(day_delta)?;

            // Check against every other order in the area using the shifted dates
            validate_no_overlap(&order.area, &to, &book.orders, Some(&order_id))?;

            let mut new_book: OrderBook = book.clone();
            for existing in &mut new_book.orders {
                if existing.id == order_id {
                    existing.start = to.start;
                    existing.end = to.end;
                }
            }

            Ok(TransitionResult {
                new_book,
                outcome: TransitionOutcome::Moved { order_id, from, to },
            })
        }
        Command::UpdateOrder { order_id, patch } => {
            let Some(index) = book.orders.iter().position(|order| order.id == order_id) else {
                return Ok(TransitionResult {
                    new_book: book.clone(),
                    outcome: TransitionOutcome::Unchanged,
                });
            };

            // No overlap, ordering or range checks on updates
            let mut new_book: OrderBook = book.clone();
            patch.apply_to(&mut new_book.orders[index]);
            let updated: ProductionOrder = new_book.orders[index].clone();

            Ok(TransitionResult {
                new_book,
                outcome: TransitionOutcome::Updated(updated),
            })
        }
    }
}

/// Builds an order from `input` and prepends it to a copy of `book`.
///
/// Returns the new book along with the created order.
///
/// # Errors
///
/// Returns `DomainError::Overlap` if the range overlaps another order in the
/// same area.
pub fn apply_create(
    book: &OrderBook,
    order_id: OrderId,
    input: NewOrder,
) -> Result<(OrderBook, ProductionOrder), CoreError> {
    // `end >= start` is the caller's precondition and is not checked here
    validate_no_overlap(&input.area, &input.range(), &book.orders, None)?;

    let order: ProductionOrder = input.into_order(order_id);

    let mut new_orders: Vec<ProductionOrder> = Vec::with_capacity(book.len() + 1);
    new_orders.push(order.clone());
    new_orders.extend(book.orders.iter().cloned());

    Ok((OrderBook::from_orders(new_orders), order))
}
