//! Occupancy command implementation.
//!
//! This module implements the `occupancy` command, which tallies open
//! sessions by category and zone. The tally is computed from the database
//! on every invocation.

use clap::Parser;
use lotkeeper::{VehicleCategory, Zone};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Show current lot occupancy.
#[derive(Parser)]
#[command(about = "Show current lot occupancy")]
pub struct OccupancyCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl OccupancyCommand {
    /// Execute the occupancy command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let occupancy = db.occupancy().map_err(CliError::from)?;
        let limit = config.inside_limit();

        if self.json {
            let value = serde_json::json!({
                "occupancy": occupancy,
                "inside_limit": limit,
                "inside_free": {
                    "car": occupancy.inside_free(VehicleCategory::Car, limit),
                    "motorcycle": occupancy.inside_free(VehicleCategory::Motorcycle, limit),
                },
            });
            println!("{}", serde_json::to_string_pretty(&value).map_err(io_error)?);
            return Ok(());
        }

        println!("{:<12} {:>7} {:>8} {:>6}", "CATEGORY", "INSIDE", "OUTSIDE", "FREE");
        for category in VehicleCategory::ALL {
            println!(
                "{:<12} {:>7} {:>8} {:>6}",
                category.as_str(),
                occupancy.count(category, Zone::Inside),
                occupancy.count(category, Zone::Outside),
                occupancy.inside_free(category, limit)
            );
        }
        if !global.quiet {
            println!("Total vehicles: {}", occupancy.total());
        }

        Ok(())
    }
}

fn io_error(e: serde_json::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}
