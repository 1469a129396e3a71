//! Transactional operations over the parking lot.
//!
//! Each operation opens one IMMEDIATE transaction, performs its checks and
//! writes against that transaction, and commits or rolls back atomically.
//! Occupancy checks and the writes that depend on them are therefore
//! serialized: two concurrent admissions cannot both observe the last free
//! inside slot.

pub mod admit;
pub mod depart;
pub mod init;
pub mod reports;
pub mod reserve;
pub mod sweep;

pub use admit::{admit_vehicle, AdmitOutcome};
pub use depart::{register_exit, ExitReceipt};
pub use init::{init_database, InitOptions, InitResult};
pub use reports::{history, monthly_revenue, HistoryEntry, RevenueReport};
pub use reserve::create_reservation;
pub use sweep::{expire_stale_reservations, SweepResult};
