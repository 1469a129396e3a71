//! Common test utilities for integration tests.
//!
//! This module provides helper functions for testing the lotkeeper
//! library through its public API.

use std::path::PathBuf;

use lotkeeper::{
    Database, DatabaseConfig, NewVehicle, OwnerRole, Plate, Vehicle, VehicleCategory,
};

/// Creates a test database in a temporary location.
///
/// The temporary directory is leaked so the database file outlives the
/// helper call; the OS reclaims it after the test run.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let db_path = test_database_path();
    Database::open(DatabaseConfig::new(db_path)).expect("Failed to open test database")
}

/// Returns a fresh path for a test database without opening it.
///
/// Useful for tests that open several connections to the same file.
#[allow(dead_code)]
pub fn test_database_path() -> PathBuf {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    // Keep the temp_dir alive by forgetting it - this is a test helper
    std::mem::forget(temp_dir);
    db_path
}

/// Registers a vehicle with the given plate, category and owner role.
#[allow(dead_code)]
pub fn register_vehicle(
    db: &mut Database,
    plate: &str,
    category: VehicleCategory,
    owner_role: OwnerRole,
) -> Vehicle {
    db.create_vehicle(&NewVehicle {
        plate: Plate::new(plate).expect("invalid test plate"),
        category,
        make: None,
        model: None,
        owner_name: "Test Owner".to_string(),
        owner_role,
    })
    .expect("Failed to register test vehicle")
}
