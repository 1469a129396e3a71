//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `register`: Register a vehicle
//! - `vehicles`: List registered vehicles
//! - `admit`: Admit a vehicle into the lot
//! - `depart`: Register an exit and bill the session
//! - `reserve`: Reserve an inside slot for a resident
//! - `sweep`: Deactivate expired reservations
//! - `occupancy`: Show current lot occupancy
//! - `history`: List closed parking sessions
//! - `revenue`: Report revenue for a calendar month

pub mod admit;
pub mod depart;
pub mod history;
pub mod init;
pub mod occupancy;
pub mod register;
pub mod reserve;
pub mod revenue;
pub mod sweep;
pub mod vehicles;

pub use admit::AdmitCommand;
pub use depart::DepartCommand;
pub use history::HistoryCommand;
pub use init::InitCommand;
pub use occupancy::OccupancyCommand;
pub use register::RegisterCommand;
pub use reserve::ReserveCommand;
pub use revenue::RevenueCommand;
pub use sweep::SweepCommand;
pub use vehicles::VehiclesCommand;
