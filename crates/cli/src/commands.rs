// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommands and their dispatch onto the API handlers.

use clap::Subcommand;
use prodcal::{Clock, OrderManager, OrderRepository, PersistenceHealth};
use prodcal_api::{
    CreateOrderRequest, UpdateOrderRequest, create_order, drop_order, get_calendar,
    list_conflicts, list_orders, move_order, set_view_date, set_view_mode, toggle_filter,
    update_order,
};
use serde_json::Value;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List orders, most recently created first
    #[command(visible_alias = "ls")]
    List {
        /// Only orders passing the status filters
        #[arg(long)]
        visible: bool,

        /// Show only these statuses (repeatable); implies --visible
        #[arg(long = "status")]
        statuses: Vec<String>,
    },

    /// Create an order
    Create {
        /// Area label or key
        #[arg(long)]
        area: String,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: String,

        #[arg(long, default_value = "planned")]
        status: String,

        #[arg(long)]
        assignee: Option<String>,

        /// Completion percentage; defaults from the status
        #[arg(long)]
        progress: Option<u8>,
    },

    /// Shift an order by a number of days
    Move {
        id: String,

        /// Days to shift; negative moves earlier
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },

    /// Reschedule an order to start on a given day
    Drop {
        id: String,

        /// New first day (YYYY-MM-DD)
        date: String,
    },

    /// Change fields of an order without overlap checks
    Update {
        id: String,

        #[arg(long)]
        area: Option<String>,

        #[arg(long, conflicts_with = "clear_assignee")]
        assignee: Option<String>,

        /// Remove the assignee
        #[arg(long)]
        clear_assignee: bool,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        progress: Option<u8>,
    },

    /// Render the calendar grid
    #[command(visible_alias = "cal")]
    Calendar {
        /// month or week
        #[arg(long)]
        mode: Option<String>,

        /// Anchor date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Show only these statuses (repeatable)
        #[arg(long = "status")]
        statuses: Vec<String>,
    },

    /// List pairs of orders overlapping in the same area
    Conflicts,
}

impl Command {
    /// Runs the command and returns its JSON output.
    ///
    /// # Errors
    ///
    /// Returns an error if the handler rejects the input, the result
    /// cannot be serialized, or a mutation was not written to storage.
    pub fn execute<R: OrderRepository, C: Clock>(
        self,
        manager: &mut OrderManager<R, C>,
    ) -> Result<Value, CliError> {
        let mutates: bool = self.mutates();
        let output: Value = match self {
            Self::List { visible, statuses } => {
                show_only(manager, &statuses)?;
                serde_json::to_value(list_orders(manager, visible || !statuses.is_empty()))?
            }
            Self::Create {
                area,
                start,
                end,
                status,
                assignee,
                progress,
            } => {
                let request: CreateOrderRequest = CreateOrderRequest {
                    area,
                    assignee,
                    start,
                    end,
                    status,
                    progress,
                };
                serde_json::to_value(create_order(manager, &request)?)?
            }
            Self::Move { id, delta } => serde_json::to_value(move_order(manager, &id, delta)?)?,
            Self::Drop { id, date } => serde_json::to_value(drop_order(manager, &id, &date)?)?,
            Self::Update {
                id,
                area,
                assignee,
                clear_assignee,
                start,
                end,
                status,
                progress,
            } => {
                let request: UpdateOrderRequest = UpdateOrderRequest {
                    area,
                    assignee,
                    clear_assignee,
                    start,
                    end,
                    status,
                    progress,
                };
                serde_json::to_value(update_order(manager, &id, &request)?)?
            }
            Self::Calendar {
                mode,
                date,
                statuses,
            } => {
                if let Some(mode) = mode {
                    set_view_mode(manager, &mode)?;
                }
                if let Some(date) = date {
                    set_view_date(manager, &date)?;
                }
                show_only(manager, &statuses)?;
                serde_json::to_value(get_calendar(manager)?)?
            }
            Self::Conflicts => serde_json::to_value(list_conflicts(manager))?,
        };

        match manager.persistence_health() {
            PersistenceHealth::Degraded { reason } if mutates => Err(CliError::NotSaved {
                reason: reason.clone(),
            }),
            _ => Ok(output),
        }
    }

    /// Checks whether the command changes the stored order list.
    #[must_use]
    pub const fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Create { .. } | Self::Move { .. } | Self::Drop { .. } | Self::Update { .. }
        )
    }
}

/// Restricts the filters to `statuses`. An empty list leaves them alone.
fn show_only<R: OrderRepository, C: Clock>(
    manager: &mut OrderManager<R, C>,
    statuses: &[String],
) -> Result<(), CliError> {
    if statuses.is_empty() {
        return Ok(());
    }
    manager.clear_filters();
    for status in statuses {
        if !manager.view().filters.iter().any(|s| s.as_str() == status) {
            toggle_filter(manager, status)?;
        }
    }
    Ok(())
}
