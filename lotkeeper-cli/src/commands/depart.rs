//! Depart command implementation.
//!
//! This module implements the `depart` command, which closes a vehicle's
//! open session and prints the fee.

use clap::Parser;
use lotkeeper::operations::register_exit;

use crate::error::CliError;
use crate::utils::{
    find_vehicle, format_timestamp, load_configuration, open_database, parse_plate, GlobalOptions,
};

/// Register a vehicle's exit and print the fee.
#[derive(Parser)]
#[command(about = "Register a vehicle's exit and print the fee")]
pub struct DepartCommand {
    /// License plate of the vehicle
    pub plate: String,
}

impl DepartCommand {
    /// Execute the depart command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plate = parse_plate(&self.plate)?;
        let vehicle = find_vehicle(&db, &plate)?;

        let session = db.open_session_for_vehicle(vehicle.id)?.ok_or_else(|| {
            CliError::Library(lotkeeper::Error::NotFound {
                resource: format!("open parking session for {plate}"),
            })
        })?;

        let receipt = register_exit(&mut db, &config, session.id).map_err(CliError::from)?;

        if global.quiet {
            println!("{}", receipt.amount);
            return Ok(());
        }

        println!(
            "{} left the {} zone after {} minute(s)",
            receipt.plate, receipt.zone, receipt.elapsed_minutes
        );
        if global.verbose {
            println!("  Entered: {}", format_timestamp(receipt.entered_at));
            println!("  Exited:  {}", format_timestamp(receipt.exited_at));
            println!("  Billed hours: {}", receipt.billable_hours);
        }
        println!("Fee due: {}", receipt.amount);

        Ok(())
    }
}
