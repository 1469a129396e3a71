//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig, NewVehicle};
use crate::vehicle::{OwnerRole, Plate, Vehicle, VehicleCategory};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Registers a vehicle with the given plate, category and owner role.
///
/// Uses a default owner name and no make/model.
///
/// # Panics
///
/// Panics if the plate is invalid or the insert fails.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn register_test_vehicle(
    db: &mut Database,
    plate: &str,
    category: VehicleCategory,
    owner_role: OwnerRole,
) -> Vehicle {
    db.create_vehicle(&NewVehicle {
        plate: Plate::new(plate).unwrap(),
        category,
        make: None,
        model: None,
        owner_name: "Test Owner".to_string(),
        owner_role,
    })
    .unwrap()
}
