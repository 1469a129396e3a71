//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, and output
//! formatting.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use lotkeeper::{Config, ConfigBuilder, Database, DatabaseConfig, Plate, Vehicle};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Configuration files
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }
    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the data directory path from global options.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }
    lotkeeper::database::default_data_dir().map_err(CliError::from)
}

/// Open the database, honoring the busy timeout from options or config.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join("lotkeeper.db");

    if !db_path.exists() && global.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Parse and normalize a plate argument.
pub fn parse_plate(input: &str) -> Result<Plate, CliError> {
    Plate::new(input).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Look up a registered vehicle by plate.
pub fn find_vehicle(db: &Database, plate: &Plate) -> Result<Vehicle, CliError> {
    db.get_vehicle_by_plate(plate)?
        .ok_or_else(|| {
            CliError::Library(lotkeeper::Error::NotFound {
                resource: format!("vehicle with plate {plate}"),
            })
        })
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
