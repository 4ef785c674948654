// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, OffsetDateTime};
use tracing::warn;

/// Source of the current calendar date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> Date;
}

/// Reads the system clock in the local timezone.
///
/// Falls back to UTC when the local offset cannot be determined, which
/// the `time` crate reports on some multi-threaded Unix processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|e| {
                warn!("Local UTC offset unavailable ({}); using UTC date", e);
                OffsetDateTime::now_utc()
            })
            .date()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
