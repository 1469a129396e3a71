//! Register command implementation.
//!
//! This module implements the `register` command, which adds a vehicle
//! to the registry.

use clap::Parser;
use lotkeeper::{NewVehicle, OwnerRole, VehicleCategory};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_plate, GlobalOptions};

/// Register a vehicle.
#[derive(Parser)]
#[command(about = "Register a vehicle in the lot's registry")]
pub struct RegisterCommand {
    /// License plate
    pub plate: String,

    /// Vehicle category (car or motorcycle)
    #[arg(long, value_name = "CATEGORY")]
    pub category: VehicleCategory,

    /// Owner's name
    #[arg(long, value_name = "NAME")]
    pub owner: String,

    /// Owner role (resident or operator)
    #[arg(long, value_name = "ROLE", default_value = "resident")]
    pub role: OwnerRole,

    /// Vehicle make
    #[arg(long, value_name = "MAKE")]
    pub make: Option<String>,

    /// Vehicle model
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,
}

impl RegisterCommand {
    /// Execute the register command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plate = parse_plate(&self.plate)?;
        let vehicle = db.create_vehicle(&NewVehicle {
            plate,
            category: self.category,
            make: self.make,
            model: self.model,
            owner_name: self.owner,
            owner_role: self.role,
        })?;

        if global.quiet {
            println!("{}", vehicle.id);
        } else {
            println!(
                "Registered {} {} (id {}, owner: {}, {})",
                vehicle.category, vehicle.plate, vehicle.id, vehicle.owner_name, vehicle.owner_role
            );
        }

        Ok(())
    }
}
