// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod clock;
mod command;
mod config;
mod error;
mod manager;
mod repository;
mod state;
mod view;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, apply_create};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::Command;
pub use config::SchedulerConfig;
pub use error::CoreError;
pub use manager::OrderManager;
pub use repository::OrderRepository;
pub use state::{OrderBook, PersistenceHealth, TransitionOutcome, TransitionResult};
pub use view::{Direction, ViewState};
