// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line errors.

use prodcal_api::ApiError;
use prodcal_persistence::PersistenceError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can make a CLI invocation fail.
#[derive(Debug, Error)]
pub enum CliError {
    /// A handler rejected the request.
    #[error("{}", .0.message())]
    Api(#[from] ApiError),

    /// The database could not be opened.
    #[error("Storage error: {0}")]
    Persistence(#[from] PersistenceError),

    /// A change was applied in memory but could not be written.
    #[error("Change was not saved: {reason}")]
    NotSaved { reason: String },

    /// A configuration file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON input or output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
