//! Vehicle admission.
//!
//! Admission decides the zone once, inside a single IMMEDIATE transaction:
//! the occupancy tally, the reservation redemption and the session insert
//! all commit or roll back together.

use chrono::Utc;
use rusqlite::TransactionBehavior;

use crate::config::Config;
use crate::database::{reservations, sessions, vehicles, Database};
use crate::error::{Error, Result};
use crate::session::{ParkingSession, Zone};
use crate::vehicle::{OwnerRole, Vehicle};

/// The result of admitting a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmitOutcome {
    /// The vehicle that was admitted.
    pub vehicle: Vehicle,
    /// The newly opened session, with the zone decided at entry.
    pub session: ParkingSession,
    /// Whether a reservation was redeemed to enter a full inside zone.
    pub redeemed_reservation: bool,
}

/// Admits a vehicle, opening a new parking session.
///
/// The zone is decided by, in order:
/// 1. Free inside capacity for the vehicle's category: inside.
/// 2. Otherwise the owner role picks the policy. A resident redeems a
///    valid reservation if one exists and enters inside even though the
///    zone is full; without one the vehicle goes outside. An operator
///    goes outside directly.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the vehicle is not registered, or
/// [`Error::Conflict`] if it already has an open session.
pub fn admit_vehicle(db: &mut Database, config: &Config, vehicle_id: i64) -> Result<AdmitOutcome> {
    let now = Utc::now();
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let vehicle = vehicles::get_vehicle_in(&tx, vehicle_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("vehicle {vehicle_id}"),
    })?;

    if sessions::open_session_in(&tx, vehicle.id)?.is_some() {
        return Err(Error::Conflict {
            details: format!("vehicle {} already has an open parking session", vehicle.plate),
        });
    }

    let occupancy = sessions::tally_occupancy_in(&tx)?;
    let (zone, redeemed_reservation) = if occupancy.inside(vehicle.category)
        < config.inside_limit()
    {
        (Zone::Inside, false)
    } else {
        match vehicle.owner_role {
            OwnerRole::Resident => {
                // Redeeming may push the inside count past the limit.
                if reservations::consume_active_in(&tx, vehicle.id, now)? {
                    (Zone::Inside, true)
                } else {
                    (Zone::Outside, false)
                }
            }
            OwnerRole::Operator => (Zone::Outside, false),
        }
    };

    let session_id = sessions::insert_session_in(&tx, vehicle.id, zone, now)?;
    tx.commit()?;

    Ok(AdmitOutcome {
        session: ParkingSession {
            id: session_id,
            vehicle_id: vehicle.id,
            zone,
            entered_at: now,
            exited_at: None,
            elapsed_minutes: None,
            amount: None,
        },
        vehicle,
        redeemed_reservation,
    })
}
