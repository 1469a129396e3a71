//! Database operations for slot reservations.
//!
//! Redemption and expiry are both expressed as conditional UPDATEs so the
//! check and the state change happen in one statement. The sweep is a
//! single set-based statement over all stale rows.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::reservation::Reservation;

use super::connection::Database;
use super::sessions::{datetime_to_unix_secs, unix_secs_to_datetime};

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (vehicle_id, reserved_at, expires_at, active)
    VALUES (?, ?, ?, 1)
";

const SELECT_RESERVATION_BY_ID: &str = r"
    SELECT id, vehicle_id, reserved_at, expires_at, active
    FROM reservations
    WHERE id = ?
";

const SELECT_REDEEMABLE: &str = r"
    SELECT id, vehicle_id, reserved_at, expires_at, active
    FROM reservations
    WHERE vehicle_id = ? AND active = 1 AND expires_at > ?
";

const CONSUME_ACTIVE: &str = r"
    UPDATE reservations
    SET active = 0
    WHERE vehicle_id = ? AND active = 1 AND expires_at > ?
";

const DEACTIVATE_STALE_FOR_VEHICLE: &str = r"
    UPDATE reservations
    SET active = 0
    WHERE vehicle_id = ? AND active = 1 AND expires_at <= ?
";

const DEACTIVATE_EXPIRED: &str = r"
    UPDATE reservations
    SET active = 0
    WHERE active = 1 AND expires_at <= ?
";

const COUNT_EXPIRED: &str = r"
    SELECT COUNT(*)
    FROM reservations
    WHERE active = 1 AND expires_at <= ?
";

const LIST_RESERVATIONS_FOR_VEHICLE: &str = r"
    SELECT id, vehicle_id, reserved_at, expires_at, active
    FROM reservations
    WHERE vehicle_id = ?
    ORDER BY reserved_at DESC, id DESC
";

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in this order: id, `vehicle_id`, `reserved_at`,
/// `expires_at`, active.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: i64 = row.get(0)?;
    let vehicle_id: i64 = row.get(1)?;
    let reserved_secs: i64 = row.get(2)?;
    let expires_secs: i64 = row.get(3)?;
    let active: bool = row.get(4)?;

    Ok(Reservation {
        id,
        vehicle_id,
        reserved_at: unix_secs_to_datetime(reserved_secs)?,
        expires_at: unix_secs_to_datetime(expires_secs)?,
        active,
    })
}

/// Inserts a new active reservation and returns it.
pub(crate) fn insert_reservation_in(
    conn: &Connection,
    vehicle_id: i64,
    reserved_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
) -> Result<Reservation> {
    conn.execute(
        INSERT_RESERVATION,
        params![
            vehicle_id,
            datetime_to_unix_secs(reserved_at),
            datetime_to_unix_secs(expires_at)
        ],
    )?;
    Ok(Reservation {
        id: conn.last_insert_rowid(),
        vehicle_id,
        reserved_at,
        expires_at,
        active: true,
    })
}

/// Returns the reservation a vehicle could redeem at `now`, if any.
pub(crate) fn find_redeemable_in(
    conn: &Connection,
    vehicle_id: i64,
    now: DateTime<Utc>,
) -> Result<Option<Reservation>> {
    let reservation = conn
        .query_row(
            SELECT_REDEEMABLE,
            params![vehicle_id, datetime_to_unix_secs(now)],
            row_to_reservation,
        )
        .optional()?;
    Ok(reservation)
}

/// Atomically redeems a vehicle's reservation, if one is valid at `now`.
///
/// The check and the clear happen in one statement, so two concurrent
/// admissions cannot both redeem the same reservation. Returns `true`
/// when a reservation was redeemed; an expired or absent reservation
/// yields `false` without touching any row.
pub(crate) fn consume_active_in(
    conn: &Connection,
    vehicle_id: i64,
    now: DateTime<Utc>,
) -> Result<bool> {
    let updated = conn.execute(
        CONSUME_ACTIVE,
        params![vehicle_id, datetime_to_unix_secs(now)],
    )?;
    Ok(updated >= 1)
}

/// Deactivates a vehicle's stale (expired but still active) rows in place.
pub(crate) fn deactivate_stale_for_vehicle_in(
    conn: &Connection,
    vehicle_id: i64,
    now: DateTime<Utc>,
) -> Result<usize> {
    let updated = conn.execute(
        DEACTIVATE_STALE_FOR_VEHICLE,
        params![vehicle_id, datetime_to_unix_secs(now)],
    )?;
    Ok(updated)
}

/// Deactivates every expired, still-active reservation in one statement.
///
/// Idempotent: a second sweep with the same `now` deactivates nothing.
pub(crate) fn deactivate_expired_in(conn: &Connection, now: DateTime<Utc>) -> Result<usize> {
    let updated = conn.execute(DEACTIVATE_EXPIRED, [datetime_to_unix_secs(now)])?;
    Ok(updated)
}

/// Counts expired, still-active reservations without touching them.
pub(crate) fn count_expired_in(conn: &Connection, now: DateTime<Utc>) -> Result<usize> {
    let count: i64 = conn.query_row(COUNT_EXPIRED, [datetime_to_unix_secs(now)], |row| {
        row.get(0)
    })?;
    Ok(usize::try_from(count).unwrap_or(0))
}

impl Database {
    /// Returns a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation(&self, reservation_id: i64) -> Result<Option<Reservation>> {
        let reservation = self
            .conn
            .query_row(SELECT_RESERVATION_BY_ID, [reservation_id], row_to_reservation)
            .optional()?;
        Ok(reservation)
    }

    /// Lists a vehicle's reservations, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations_for_vehicle(&self, vehicle_id: i64) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(LIST_RESERVATIONS_FOR_VEHICLE)?;
        let rows = stmt.query_map([vehicle_id], row_to_reservation)?;
        let mut reservations = Vec::new();
        for reservation in rows {
            reservations.push(reservation?);
        }
        Ok(reservations)
    }
}
