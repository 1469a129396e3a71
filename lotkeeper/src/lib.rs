#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # lotkeeper
//!
//! A library for managing parking lot slot allocation and reservations.
//!
//! This library provides core types and functionality for registering
//! vehicles, admitting them into a capacity-limited lot, reserving inside
//! slots for residents, and billing parking sessions on exit.
//!
//! ## Core Types
//!
//! - [`Vehicle`], [`Plate`], [`VehicleCategory`] and [`OwnerRole`]: the vehicle registry
//! - [`ParkingSession`] and [`Zone`]: open and closed parking sessions
//! - [`Reservation`]: time-limited inside-slot reservations
//! - [`RateTable`] and [`Occupancy`]: billing rates and lot state
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use lotkeeper::{Plate, VehicleCategory};
//!
//! // Plates are normalized to uppercase
//! let plate = Plate::new("ab-1234").unwrap();
//! assert_eq!(plate.as_str(), "AB-1234");
//!
//! // Categories parse case-insensitively
//! let category: VehicleCategory = "Car".parse().unwrap();
//! assert_eq!(category, VehicleCategory::Car);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod occupancy;
pub mod operations;
pub mod reservation;
pub mod session;
pub mod tariff;
pub mod vehicle;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig, NewVehicle};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use occupancy::Occupancy;
pub use operations::{
    AdmitOutcome, ExitReceipt, HistoryEntry, InitOptions, InitResult, RevenueReport, SweepResult,
};
pub use reservation::Reservation;
pub use session::{ParkingSession, Zone};
pub use tariff::RateTable;
pub use vehicle::{OwnerRole, Plate, Vehicle, VehicleCategory};
