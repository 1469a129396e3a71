//! Database operations for parking sessions.
//!
//! The `_in` variants take an existing connection or transaction so the
//! admission and exit operations can combine them atomically. Occupancy is
//! always tallied fresh from open sessions; nothing here caches counts.

use chrono::{DateTime, TimeZone, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::occupancy::Occupancy;
use crate::session::{ParkingSession, Zone};
use crate::vehicle::{Plate, VehicleCategory};

use super::connection::Database;

const SELECT_OPEN_SESSION: &str = r"
    SELECT id, vehicle_id, zone, entered_at, exited_at, elapsed_minutes, amount
    FROM sessions
    WHERE vehicle_id = ? AND exited_at IS NULL
";

const SELECT_SESSION_BY_ID: &str = r"
    SELECT id, vehicle_id, zone, entered_at, exited_at, elapsed_minutes, amount
    FROM sessions
    WHERE id = ?
";

const INSERT_SESSION: &str = r"
    INSERT INTO sessions (vehicle_id, zone, entered_at)
    VALUES (?, ?, ?)
";

const CLOSE_SESSION: &str = r"
    UPDATE sessions
    SET exited_at = ?, elapsed_minutes = ?, amount = ?
    WHERE id = ? AND exited_at IS NULL
";

const TALLY_OPEN_SESSIONS: &str = r"
    SELECT v.category, s.zone, COUNT(*)
    FROM sessions s
    JOIN vehicles v ON v.id = s.vehicle_id
    WHERE s.exited_at IS NULL
    GROUP BY v.category, s.zone
";

const LIST_CLOSED_SESSIONS: &str = r"
    SELECT s.id, s.vehicle_id, s.zone, s.entered_at, s.exited_at,
           s.elapsed_minutes, s.amount, v.plate
    FROM sessions s
    JOIN vehicles v ON v.id = s.vehicle_id
    WHERE s.exited_at IS NOT NULL
    ORDER BY s.entered_at DESC, s.id DESC
";

const LIST_CLOSED_SESSIONS_FOR_PLATE: &str = r"
    SELECT s.id, s.vehicle_id, s.zone, s.entered_at, s.exited_at,
           s.elapsed_minutes, s.amount, v.plate
    FROM sessions s
    JOIN vehicles v ON v.id = s.vehicle_id
    WHERE s.exited_at IS NOT NULL AND v.plate = ?
    ORDER BY s.entered_at DESC, s.id DESC
";

const SUM_AMOUNTS_BETWEEN: &str = r"
    SELECT COALESCE(SUM(s.amount), 0)
    FROM sessions s
    WHERE s.exited_at IS NOT NULL AND s.exited_at >= ? AND s.exited_at < ?
";

const SUM_AMOUNTS_BY_PLATE_BETWEEN: &str = r"
    SELECT v.plate, COALESCE(SUM(s.amount), 0) AS total
    FROM sessions s
    JOIN vehicles v ON v.id = s.vehicle_id
    WHERE s.exited_at IS NOT NULL AND s.exited_at >= ? AND s.exited_at < ?
    GROUP BY v.plate
    ORDER BY total DESC, v.plate
";

/// Converts a `DateTime<Utc>` to Unix epoch seconds for database storage.
pub(super) fn datetime_to_unix_secs(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}

/// Converts Unix epoch seconds from the database to a `DateTime<Utc>`.
pub(super) fn unix_secs_to_datetime(secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single().ok_or_else(|| {
        rusqlite::Error::ToSqlConversionFailure(format!("timestamp {secs} out of range").into())
    })
}

/// Helper function to deserialize a session from a database row.
///
/// Expects row fields in this order: id, `vehicle_id`, zone, `entered_at`,
/// `exited_at`, `elapsed_minutes`, amount.
fn row_to_session(row: &rusqlite::Row<'_>) -> rusqlite::Result<ParkingSession> {
    let id: i64 = row.get(0)?;
    let vehicle_id: i64 = row.get(1)?;
    let zone: String = row.get(2)?;
    let entered_secs: i64 = row.get(3)?;
    let exited_secs: Option<i64> = row.get(4)?;
    let elapsed_minutes: Option<i64> = row.get(5)?;
    let amount: Option<i64> = row.get(6)?;

    let zone: Zone = zone
        .parse()
        .map_err(|e: String| rusqlite::Error::ToSqlConversionFailure(e.into()))?;
    let entered_at = unix_secs_to_datetime(entered_secs)?;
    let exited_at = exited_secs.map(unix_secs_to_datetime).transpose()?;

    Ok(ParkingSession {
        id,
        vehicle_id,
        zone,
        entered_at,
        exited_at,
        elapsed_minutes,
        amount,
    })
}

/// Returns the open session for a vehicle, if any.
pub(crate) fn open_session_in(conn: &Connection, vehicle_id: i64) -> Result<Option<ParkingSession>> {
    let session = conn
        .query_row(SELECT_OPEN_SESSION, [vehicle_id], row_to_session)
        .optional()?;
    Ok(session)
}

/// Returns a session by id, open or closed.
pub(crate) fn get_session_in(conn: &Connection, session_id: i64) -> Result<Option<ParkingSession>> {
    let session = conn
        .query_row(SELECT_SESSION_BY_ID, [session_id], row_to_session)
        .optional()?;
    Ok(session)
}

/// Inserts a new open session and returns its row id.
pub(crate) fn insert_session_in(
    conn: &Connection,
    vehicle_id: i64,
    zone: Zone,
    entered_at: DateTime<Utc>,
) -> Result<i64> {
    conn.execute(
        INSERT_SESSION,
        params![vehicle_id, zone.as_str(), datetime_to_unix_secs(entered_at)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Closes an open session, recording exit time, elapsed minutes and fee.
///
/// Returns `false` when the session does not exist or is already closed,
/// so a lost race with a concurrent exit is detected by the caller rather
/// than closing the session twice.
pub(crate) fn close_session_in(
    conn: &Connection,
    session_id: i64,
    exited_at: DateTime<Utc>,
    elapsed_minutes: i64,
    amount: i64,
) -> Result<bool> {
    let updated = conn.execute(
        CLOSE_SESSION,
        params![
            datetime_to_unix_secs(exited_at),
            elapsed_minutes,
            amount,
            session_id
        ],
    )?;
    Ok(updated == 1)
}

/// Tallies open sessions by category and zone.
pub(crate) fn tally_occupancy_in(conn: &Connection) -> Result<Occupancy> {
    let mut stmt = conn.prepare(TALLY_OPEN_SESSIONS)?;
    let rows = stmt.query_map([], |row| {
        let category: String = row.get(0)?;
        let zone: String = row.get(1)?;
        let count: i64 = row.get(2)?;
        Ok((category, zone, count))
    })?;

    let mut occupancy = Occupancy::default();
    for row in rows {
        let (category, zone, count) = row?;
        let category: VehicleCategory = category
            .parse()
            .map_err(|e: String| rusqlite::Error::ToSqlConversionFailure(e.into()))?;
        let zone: Zone = zone
            .parse()
            .map_err(|e: String| rusqlite::Error::ToSqlConversionFailure(e.into()))?;
        let count = u32::try_from(count).map_err(|e| {
            rusqlite::Error::ToSqlConversionFailure(Box::new(e))
        })?;
        occupancy.record(category, zone, count);
    }
    Ok(occupancy)
}

/// Lists closed sessions with their plates, newest entry first.
///
/// When `plate` is given, only that vehicle's sessions are returned.
pub(crate) fn list_closed_sessions_in(
    conn: &Connection,
    plate: Option<&Plate>,
) -> Result<Vec<(Plate, ParkingSession)>> {
    let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<(Plate, ParkingSession)> {
        let session = row_to_session(row)?;
        let plate: String = row.get(7)?;
        let plate =
            Plate::new(&plate).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        Ok((plate, session))
    };

    let mut results = Vec::new();
    match plate {
        Some(plate) => {
            let mut stmt = conn.prepare(LIST_CLOSED_SESSIONS_FOR_PLATE)?;
            let rows = stmt.query_map([plate.as_str()], map_row)?;
            for row in rows {
                results.push(row?);
            }
        }
        None => {
            let mut stmt = conn.prepare(LIST_CLOSED_SESSIONS)?;
            let rows = stmt.query_map([], map_row)?;
            for row in rows {
                results.push(row?);
            }
        }
    }
    Ok(results)
}

/// Sums fees for sessions whose exit falls in `[start, end)`.
pub(crate) fn sum_amounts_between_in(
    conn: &Connection,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<i64> {
    let total = conn.query_row(
        SUM_AMOUNTS_BETWEEN,
        params![datetime_to_unix_secs(start), datetime_to_unix_secs(end)],
        |row| row.get(0),
    )?;
    Ok(total)
}

/// Per-plate fee totals for sessions whose exit falls in `[start, end)`.
pub(crate) fn sum_amounts_by_plate_in(
    conn: &Connection,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<(Plate, i64)>> {
    let mut stmt = conn.prepare(SUM_AMOUNTS_BY_PLATE_BETWEEN)?;
    let rows = stmt.query_map(
        params![datetime_to_unix_secs(start), datetime_to_unix_secs(end)],
        |row| {
            let plate: String = row.get(0)?;
            let total: i64 = row.get(1)?;
            let plate = Plate::new(&plate)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            Ok((plate, total))
        },
    )?;
    let mut totals = Vec::new();
    for row in rows {
        totals.push(row?);
    }
    Ok(totals)
}

impl Database {
    /// Tallies current occupancy from open sessions.
    ///
    /// The tally is computed fresh on every call; no counts are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn occupancy(&self) -> Result<Occupancy> {
        tally_occupancy_in(&self.conn)
    }

    /// Returns the open session for a vehicle, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn open_session_for_vehicle(&self, vehicle_id: i64) -> Result<Option<ParkingSession>> {
        open_session_in(&self.conn, vehicle_id)
    }

    /// Returns a session by id, open or closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_session(&self, session_id: i64) -> Result<Option<ParkingSession>> {
        get_session_in(&self.conn, session_id)
    }
}
