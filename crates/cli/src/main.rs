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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod error;

use clap::Parser;
use prodcal::{Clock, FixedClock, OrderManager, SchedulerConfig, SystemClock};
use prodcal_api::translate_domain_error;
use prodcal_domain::{AreaConfig, default_assignees, parse_iso_date};
use prodcal_persistence::{BlobOrderRepository, SqliteBlobStore};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use time::Date;
use tracing::{error, info};

use crate::commands::Command;
use crate::error::CliError;

/// Production calendar - schedule production orders across areas
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long)]
    today: Option<String>,

    /// JSON file with the list of areas, replacing the standard four
    #[arg(long)]
    areas: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// Reads the area list from a JSON array of `{key, label, color_var}` objects.
fn load_areas(path: &Path) -> Result<Vec<AreaConfig>, CliError> {
    let contents: String = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

fn load_config(areas: Option<&Path>) -> Result<SchedulerConfig, CliError> {
    let Some(path) = areas else {
        return Ok(SchedulerConfig::default());
    };
    info!("Loading areas from {}", path.display());
    Ok(SchedulerConfig {
        areas: load_areas(path)?,
        assignees: default_assignees(),
    })
}

fn resolve_today(today: Option<&str>) -> Result<Date, CliError> {
    match today {
        Some(value) => Ok(parse_iso_date(value).map_err(translate_domain_error)?),
        None => Ok(SystemClock.today()),
    }
}

fn run(args: Args) -> Result<String, CliError> {
    let config: SchedulerConfig = load_config(args.areas.as_deref())?;
    let clock: FixedClock = FixedClock(resolve_today(args.today.as_deref())?);

    let store: SqliteBlobStore = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path.display());
        SqliteBlobStore::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteBlobStore::new_in_memory()?
    };

    let mut manager: OrderManager<BlobOrderRepository<SqliteBlobStore>, FixedClock> =
        OrderManager::initialize(BlobOrderRepository::new(store), clock, config);

    let output: serde_json::Value = args.command.execute(&mut manager)?;
    Ok(serde_json::to_string_pretty(&output)?)
}

fn main() -> ExitCode {
    let args: Args = Args::parse();

    // Logs go to stderr; stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
