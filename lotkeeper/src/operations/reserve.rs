//! Reservation creation.
//!
//! A reservation only makes sense when the lot is full for the vehicle's
//! category: with a free slot the vehicle enters directly, so the request
//! is refused. Only residents may reserve.

use chrono::Utc;
use rusqlite::TransactionBehavior;

use crate::config::Config;
use crate::database::{reservations, sessions, vehicles, Database};
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::vehicle::OwnerRole;

/// Creates a reservation for a resident's vehicle.
///
/// The reservation is valid for the configured validity window (30 minutes
/// by default) from the moment it is created. Any stale reservation the
/// vehicle still holds is deactivated and replaced.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the vehicle is not registered, and
/// [`Error::Conflict`] when the owner is not a resident, the vehicle is
/// currently parked, inside capacity for its category is still free, or an
/// unexpired reservation already exists.
pub fn create_reservation(
    db: &mut Database,
    config: &Config,
    vehicle_id: i64,
) -> Result<Reservation> {
    let now = Utc::now();
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let vehicle = vehicles::get_vehicle_in(&tx, vehicle_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("vehicle {vehicle_id}"),
    })?;

    match vehicle.owner_role {
        OwnerRole::Resident => {}
        OwnerRole::Operator => {
            return Err(Error::Conflict {
                details: format!(
                    "vehicle {} is operator-owned and cannot hold reservations",
                    vehicle.plate
                ),
            });
        }
    }

    if let Some(session) = sessions::open_session_in(&tx, vehicle_id)? {
        return Err(Error::Conflict {
            details: format!(
                "vehicle {} is currently parked (session {})",
                vehicle.plate, session.id
            ),
        });
    }

    let occupancy = sessions::tally_occupancy_in(&tx)?;
    if occupancy.inside(vehicle.category) < config.inside_limit() {
        return Err(Error::Conflict {
            details: format!(
                "inside capacity for {} is not exhausted, enter directly",
                vehicle.category
            ),
        });
    }

    // Stale rows do not block a fresh reservation, they get swept here
    reservations::deactivate_stale_for_vehicle_in(&tx, vehicle_id, now)?;

    if let Some(existing) = reservations::find_redeemable_in(&tx, vehicle_id, now)? {
        return Err(Error::Conflict {
            details: format!(
                "vehicle {} already holds reservation {} valid until {}",
                vehicle.plate, existing.id, existing.expires_at
            ),
        });
    }

    let expires_at = now + config.reservation_validity();
    let reservation = reservations::insert_reservation_in(&tx, vehicle_id, now, expires_at)?;
    tx.commit()?;
    Ok(reservation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CapacityConfig, Config};
    use crate::database::sessions::insert_session_in;
    use crate::database::test_util::{create_test_database, register_test_vehicle};
    use crate::session::Zone;
    use crate::vehicle::{OwnerRole, VehicleCategory};
    use chrono::Duration;

    fn tight_config() -> Config {
        Config {
            capacity: Some(CapacityConfig { inside_limit: 1 }),
            ..Config::default()
        }
    }

    fn fill_inside(db: &mut crate::database::Database, plate: &str, category: VehicleCategory) {
        let filler = register_test_vehicle(db, plate, category, OwnerRole::Operator);
        insert_session_in(db.connection(), filler.id, Zone::Inside, Utc::now()).unwrap();
    }

    #[test]
    fn test_reserve_succeeds_when_lot_is_full() {
        let mut db = create_test_database();
        fill_inside(&mut db, "FILL01", VehicleCategory::Car);
        let vehicle = register_test_vehicle(
            &mut db,
            "CAR001",
            VehicleCategory::Car,
            OwnerRole::Resident,
        );

        let reservation = create_reservation(&mut db, &tight_config(), vehicle.id).unwrap();
        assert!(reservation.active);
        assert_eq!(reservation.vehicle_id, vehicle.id);
        assert_eq!(
            reservation.expires_at - reservation.reserved_at,
            Duration::minutes(30)
        );
    }

    #[test]
    fn test_reserve_refused_while_capacity_is_free() {
        let mut db = create_test_database();
        let vehicle = register_test_vehicle(
            &mut db,
            "CAR001",
            VehicleCategory::Car,
            OwnerRole::Resident,
        );

        let err = create_reservation(&mut db, &tight_config(), vehicle.id).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_reserve_checks_capacity_per_category() {
        let mut db = create_test_database();
        // Car zone full, motorcycle zone empty
        fill_inside(&mut db, "FILL01", VehicleCategory::Car);
        let moto = register_test_vehicle(
            &mut db,
            "MOT001",
            VehicleCategory::Motorcycle,
            OwnerRole::Resident,
        );

        let err = create_reservation(&mut db, &tight_config(), moto.id).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_operator_cannot_reserve() {
        let mut db = create_test_database();
        fill_inside(&mut db, "FILL01", VehicleCategory::Car);
        let vehicle = register_test_vehicle(
            &mut db,
            "CAR001",
            VehicleCategory::Car,
            OwnerRole::Operator,
        );

        let err = create_reservation(&mut db, &tight_config(), vehicle.id).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_unknown_vehicle_is_not_found() {
        let mut db = create_test_database();
        let err = create_reservation(&mut db, &tight_config(), 999).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_parked_vehicle_cannot_reserve() {
        let mut db = create_test_database();
        fill_inside(&mut db, "FILL01", VehicleCategory::Car);
        let vehicle = register_test_vehicle(
            &mut db,
            "CAR001",
            VehicleCategory::Car,
            OwnerRole::Resident,
        );
        insert_session_in(db.connection(), vehicle.id, Zone::Outside, Utc::now()).unwrap();

        let err = create_reservation(&mut db, &tight_config(), vehicle.id).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_duplicate_reservation_is_conflict() {
        let mut db = create_test_database();
        fill_inside(&mut db, "FILL01", VehicleCategory::Car);
        let vehicle = register_test_vehicle(
            &mut db,
            "CAR001",
            VehicleCategory::Car,
            OwnerRole::Resident,
        );

        create_reservation(&mut db, &tight_config(), vehicle.id).unwrap();
        let err = create_reservation(&mut db, &tight_config(), vehicle.id).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_stale_reservation_is_replaced() {
        let mut db = create_test_database();
        fill_inside(&mut db, "FILL01", VehicleCategory::Car);
        let vehicle = register_test_vehicle(
            &mut db,
            "CAR001",
            VehicleCategory::Car,
            OwnerRole::Resident,
        );
        // An expired reservation still flagged active
        let reserved = Utc::now() - Duration::minutes(90);
        let stale = crate::database::reservations::insert_reservation_in(
            db.connection(),
            vehicle.id,
            reserved,
            reserved + Duration::minutes(30),
        )
        .unwrap();

        let fresh = create_reservation(&mut db, &tight_config(), vehicle.id).unwrap();
        assert_ne!(fresh.id, stale.id);
        assert!(fresh.active);
        assert!(!db.get_reservation(stale.id).unwrap().unwrap().active);
    }
}
