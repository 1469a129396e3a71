//! Vehicles command implementation.
//!
//! This module implements the `vehicles` command, which lists all
//! registered vehicles.

use std::io::Write;

use clap::Parser;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// List registered vehicles.
#[derive(Parser)]
#[command(about = "List registered vehicles")]
pub struct VehiclesCommand {}

impl VehiclesCommand {
    /// Execute the vehicles command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let vehicles = db.list_vehicles().map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if global.quiet {
            for vehicle in vehicles {
                writeln!(handle, "{}", vehicle.plate)?;
            }
            return Ok(());
        }

        if vehicles.is_empty() {
            writeln!(handle, "No vehicles registered")?;
            return Ok(());
        }

        writeln!(handle, "{:<12} {:<11} {:<9} OWNER", "PLATE", "CATEGORY", "ROLE")?;
        for vehicle in vehicles {
            writeln!(
                handle,
                "{:<12} {:<11} {:<9} {}",
                vehicle.plate.as_str(),
                vehicle.category.as_str(),
                vehicle.owner_role.as_str(),
                vehicle.owner_name
            )?;
        }

        Ok(())
    }
}
