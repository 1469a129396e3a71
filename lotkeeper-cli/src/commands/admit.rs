//! Admit command implementation.
//!
//! This module implements the `admit` command, which opens a parking
//! session for a registered vehicle.

use clap::Parser;
use lotkeeper::operations::admit_vehicle;
use lotkeeper::Zone;

use crate::error::CliError;
use crate::utils::{find_vehicle, load_configuration, open_database, parse_plate, GlobalOptions};

/// Admit a vehicle into the lot.
#[derive(Parser)]
#[command(about = "Admit a vehicle into the lot")]
pub struct AdmitCommand {
    /// License plate of the vehicle
    pub plate: String,
}

impl AdmitCommand {
    /// Execute the admit command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plate = parse_plate(&self.plate)?;
        let vehicle = find_vehicle(&db, &plate)?;

        let outcome = admit_vehicle(&mut db, &config, vehicle.id).map_err(CliError::from)?;

        if global.quiet {
            println!("{}", outcome.session.zone);
            return Ok(());
        }

        match outcome.session.zone {
            Zone::Inside if outcome.redeemed_reservation => {
                println!(
                    "Admitted {} inside (session {}, reservation redeemed)",
                    plate, outcome.session.id
                );
            }
            Zone::Inside => {
                println!("Admitted {} inside (session {})", plate, outcome.session.id);
            }
            Zone::Outside => {
                println!(
                    "Inside zone full: admitted {} outside (session {})",
                    plate, outcome.session.id
                );
            }
        }

        Ok(())
    }
}
