//! Database layer for persistent storage of vehicles, parking sessions
//! and reservations.
//!
//! This module provides a SQLite-based storage layer with connection
//! management, schema versioning, and typed CRUD operations. Multi-step
//! operations (admission, exit, reservation creation) run inside IMMEDIATE
//! transactions built from the `_in` variants that take a raw connection.
//!
//! # Examples
//!
//! ```no_run
//! use lotkeeper::database::{Database, DatabaseConfig, NewVehicle};
//! use lotkeeper::{OwnerRole, Plate, VehicleCategory};
//!
//! let config = DatabaseConfig::new("/tmp/lotkeeper.db");
//! let mut db = Database::open(config).unwrap();
//!
//! let vehicle = db
//!     .create_vehicle(&NewVehicle {
//!         plate: Plate::new("ABC123").unwrap(),
//!         category: VehicleCategory::Car,
//!         make: None,
//!         model: None,
//!         owner_name: "Ana".to_string(),
//!         owner_role: OwnerRole::Resident,
//!     })
//!     .unwrap();
//!
//! let occupancy = db.occupancy().unwrap();
//! println!("{} vehicles parked, {:?}", occupancy.total(), vehicle);
//! ```

mod config;
mod connection;
pub mod migrations;
pub mod reservations;
mod schema;
pub mod sessions;
pub(crate) mod vehicles;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, DatabaseConfig};
pub use connection::Database;
pub use vehicles::NewVehicle;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
