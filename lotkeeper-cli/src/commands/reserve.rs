//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which reserves an inside
//! slot for a resident's vehicle while the lot is full.

use clap::Parser;
use lotkeeper::operations::create_reservation;

use crate::error::CliError;
use crate::utils::{
    find_vehicle, format_timestamp, load_configuration, open_database, parse_plate, GlobalOptions,
};

/// Reserve an inside slot for a resident's vehicle.
#[derive(Parser)]
#[command(about = "Reserve an inside slot for a resident's vehicle")]
pub struct ReserveCommand {
    /// License plate of the vehicle
    pub plate: String,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plate = parse_plate(&self.plate)?;
        let vehicle = find_vehicle(&db, &plate)?;

        let reservation = create_reservation(&mut db, &config, vehicle.id).map_err(CliError::from)?;

        if global.quiet {
            println!("{}", reservation.id);
        } else {
            println!(
                "Reserved an inside slot for {} until {} (reservation {})",
                plate,
                format_timestamp(reservation.expires_at),
                reservation.id
            );
        }

        Ok(())
    }
}
