//! Session history and revenue reports.

use chrono::{DateTime, TimeZone, Utc};

use crate::database::{sessions, vehicles, Database};
use crate::error::{Error, Result};
use crate::session::ParkingSession;
use crate::vehicle::Plate;

/// One closed session in a history listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The vehicle's plate.
    pub plate: Plate,
    /// The closed session.
    pub session: ParkingSession,
}

/// Monthly revenue, overall and broken down by plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueReport {
    /// Report year.
    pub year: i32,
    /// Report month (1 through 12).
    pub month: u32,
    /// Sum of all fees collected in the month.
    pub total: i64,
    /// Per-plate totals, highest first.
    pub by_plate: Vec<(Plate, i64)>,
}

/// Lists closed sessions, newest first, optionally for a single plate.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when a plate filter names an unregistered
/// vehicle.
pub fn history(db: &Database, plate: Option<&Plate>) -> Result<Vec<HistoryEntry>> {
    let conn = db.connection();
    if let Some(plate) = plate {
        if vehicles::get_vehicle_by_plate_in(conn, plate)?.is_none() {
            return Err(Error::NotFound {
                resource: format!("vehicle with plate {plate}"),
            });
        }
    }
    let rows = sessions::list_closed_sessions_in(conn, plate)?;
    Ok(rows
        .into_iter()
        .map(|(plate, session)| HistoryEntry { plate, session })
        .collect())
}

/// Sums fees over a calendar month, attributed by exit time.
///
/// The window is half-open: an exit at midnight on the first of the next
/// month belongs to the next month.
///
/// # Errors
///
/// Returns [`Error::Validation`] when `month` is not 1 through 12.
pub fn monthly_revenue(db: &Database, year: i32, month: u32) -> Result<RevenueReport> {
    let start = month_start(year, month)?;
    let end = if month == 12 {
        month_start(year + 1, 1)?
    } else {
        month_start(year, month + 1)?
    };

    let conn = db.connection();
    let total = sessions::sum_amounts_between_in(conn, start, end)?;
    let by_plate = sessions::sum_amounts_by_plate_in(conn, start, end)?;

    Ok(RevenueReport {
        year,
        month,
        total,
        by_plate,
    })
}

fn month_start(year: i32, month: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| Error::Validation {
            field: "month".to_string(),
            message: format!("{year}-{month:02} is not a valid calendar month"),
        })
}
