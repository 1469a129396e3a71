//! Exit registration and billing.
//!
//! Closing a session is a conditional UPDATE guarded by `exited_at IS
//! NULL`, so a session closes at most once even under concurrent exits.

use chrono::{DateTime, Utc};
use rusqlite::TransactionBehavior;

use crate::config::Config;
use crate::database::{sessions, vehicles, Database};
use crate::error::{Error, Result};
use crate::session::Zone;
use crate::tariff;
use crate::vehicle::Plate;

/// The receipt produced when a vehicle exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitReceipt {
    /// The closed session's id.
    pub session_id: i64,
    /// The vehicle's plate.
    pub plate: Plate,
    /// The zone assigned at entry, which keyed the rate.
    pub zone: Zone,
    /// When the vehicle entered.
    pub entered_at: DateTime<Utc>,
    /// When the vehicle left.
    pub exited_at: DateTime<Utc>,
    /// Whole minutes parked (informational).
    pub elapsed_minutes: i64,
    /// Hours billed (elapsed time rounded up, minimum one).
    pub billable_hours: i64,
    /// The fee charged.
    pub amount: i64,
}

/// Registers a vehicle's exit, closing its session and computing the fee.
///
/// The fee is the elapsed time rounded up to whole hours (minimum one for
/// any positive stay) times the configured rate for the vehicle's category
/// and the zone recorded at entry.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if no session has the given id or the
/// session is already closed.
pub fn register_exit(db: &mut Database, config: &Config, session_id: i64) -> Result<ExitReceipt> {
    let now = Utc::now();
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let session = sessions::get_session_in(&tx, session_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("parking session {session_id}"),
    })?;
    if !session.is_open() {
        return Err(Error::NotFound {
            resource: format!("open parking session {session_id}"),
        });
    }

    let vehicle =
        vehicles::get_vehicle_in(&tx, session.vehicle_id)?.ok_or_else(|| Error::NotFound {
            resource: format!("vehicle {}", session.vehicle_id),
        })?;

    let elapsed = now - session.entered_at;
    let elapsed_minutes = tariff::elapsed_whole_minutes(elapsed);
    let billable_hours = tariff::billable_hours(elapsed);
    let amount = config.rate_table().fee(vehicle.category, session.zone, elapsed);

    // A concurrent exit may have closed the row since the read above
    if !sessions::close_session_in(&tx, session_id, now, elapsed_minutes, amount)? {
        return Err(Error::NotFound {
            resource: format!("open parking session {session_id}"),
        });
    }

    tx.commit()?;

    Ok(ExitReceipt {
        session_id,
        plate: vehicle.plate,
        zone: session.zone,
        entered_at: session.entered_at,
        exited_at: now,
        elapsed_minutes,
        billable_hours,
        amount,
    })
}
