//! Database operations for the vehicle registry.
//!
//! Vehicles are registered once and read on every admission, reservation
//! and report. Lookups by plate back the CLI surface; lookups by id back
//! the transactional operations.

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::error::{Error, Result};
use crate::vehicle::{OwnerRole, Plate, Vehicle, VehicleCategory};

use super::connection::Database;

const INSERT_VEHICLE: &str = r"
    INSERT INTO vehicles (plate, category, make, model, owner_name, owner_role)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_VEHICLE_BY_ID: &str = r"
    SELECT id, plate, category, make, model, owner_name, owner_role
    FROM vehicles
    WHERE id = ?
";

const SELECT_VEHICLE_BY_PLATE: &str = r"
    SELECT id, plate, category, make, model, owner_name, owner_role
    FROM vehicles
    WHERE plate = ?
";

const LIST_VEHICLES: &str = r"
    SELECT id, plate, category, make, model, owner_name, owner_role
    FROM vehicles
    ORDER BY plate
";

/// A vehicle registration request.
#[derive(Debug, Clone)]
pub struct NewVehicle {
    /// The license plate (unique).
    pub plate: Plate,
    /// The vehicle category.
    pub category: VehicleCategory,
    /// Manufacturer, if recorded.
    pub make: Option<String>,
    /// Model, if recorded.
    pub model: Option<String>,
    /// Name of the owning user.
    pub owner_name: String,
    /// Role of the owning user.
    pub owner_role: OwnerRole,
}

/// Helper function to deserialize a vehicle from a database row.
///
/// Expects row fields in this order: id, plate, category, make, model,
/// `owner_name`, `owner_role`.
fn row_to_vehicle(row: &rusqlite::Row<'_>) -> rusqlite::Result<Vehicle> {
    let id: i64 = row.get(0)?;
    let plate: String = row.get(1)?;
    let category: String = row.get(2)?;
    let make: Option<String> = row.get(3)?;
    let model: Option<String> = row.get(4)?;
    let owner_name: String = row.get(5)?;
    let owner_role: String = row.get(6)?;

    let plate =
        Plate::new(&plate).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let category: VehicleCategory = category
        .parse()
        .map_err(|e: String| rusqlite::Error::ToSqlConversionFailure(e.into()))?;
    let owner_role: OwnerRole = owner_role
        .parse()
        .map_err(|e: String| rusqlite::Error::ToSqlConversionFailure(e.into()))?;

    Ok(Vehicle {
        id,
        plate,
        category,
        make,
        model,
        owner_name,
        owner_role,
    })
}

/// Looks up a vehicle by id using an existing connection or transaction.
pub(crate) fn get_vehicle_in(conn: &Connection, vehicle_id: i64) -> Result<Option<Vehicle>> {
    let vehicle = conn
        .query_row(SELECT_VEHICLE_BY_ID, [vehicle_id], row_to_vehicle)
        .optional()?;
    Ok(vehicle)
}

/// Looks up a vehicle by plate using an existing connection or transaction.
pub(crate) fn get_vehicle_by_plate_in(conn: &Connection, plate: &Plate) -> Result<Option<Vehicle>> {
    let vehicle = conn
        .query_row(SELECT_VEHICLE_BY_PLATE, [plate.as_str()], row_to_vehicle)
        .optional()?;
    Ok(vehicle)
}

impl Database {
    /// Registers a new vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`] if a vehicle with the same plate is
    /// already registered, or [`Error::Validation`] if the owner name is
    /// empty.
    pub fn create_vehicle(&mut self, new: &NewVehicle) -> Result<Vehicle> {
        if new.owner_name.trim().is_empty() {
            return Err(Error::Validation {
                field: "owner_name".into(),
                message: "must be non-empty".into(),
            });
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if get_vehicle_by_plate_in(&tx, &new.plate)?.is_some() {
            return Err(Error::Conflict {
                details: format!("vehicle with plate {} is already registered", new.plate),
            });
        }

        tx.execute(
            INSERT_VEHICLE,
            params![
                new.plate.as_str(),
                new.category.as_str(),
                new.make,
                new.model,
                new.owner_name,
                new.owner_role.as_str(),
            ],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;

        Ok(Vehicle {
            id,
            plate: new.plate.clone(),
            category: new.category,
            make: new.make.clone(),
            model: new.model.clone(),
            owner_name: new.owner_name.clone(),
            owner_role: new.owner_role,
        })
    }

    /// Looks up a vehicle by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_vehicle(&self, vehicle_id: i64) -> Result<Option<Vehicle>> {
        get_vehicle_in(&self.conn, vehicle_id)
    }

    /// Looks up a vehicle by plate.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_vehicle_by_plate(&self, plate: &Plate) -> Result<Option<Vehicle>> {
        get_vehicle_by_plate_in(&self.conn, plate)
    }

    /// Lists all registered vehicles, ordered by plate.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_vehicles(&self) -> Result<Vec<Vehicle>> {
        let mut stmt = self.conn.prepare(LIST_VEHICLES)?;
        let rows = stmt.query_map([], row_to_vehicle)?;
        let mut vehicles = Vec::new();
        for vehicle in rows {
            vehicles.push(vehicle?);
        }
        Ok(vehicles)
    }
}
