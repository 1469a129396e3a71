//! Stale reservation sweep.

use chrono::Utc;

use crate::database::{reservations, Database};
use crate::error::Result;

/// The result of an expiry sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// How many reservations were (or, in a dry run, would be) deactivated.
    pub deactivated: usize,
    /// Whether this was a dry run that left the rows untouched.
    pub dry_run: bool,
}

/// Deactivates every expired reservation still flagged active.
///
/// One set-based UPDATE covers all stale rows, so the sweep costs the same
/// whether it touches one reservation or a thousand. Running it twice is
/// harmless: the second pass matches nothing. With `dry_run` the stale rows
/// are only counted.
///
/// # Errors
///
/// Returns [`crate::Error::Database`] if the statement fails.
pub fn expire_stale_reservations(db: &mut Database, dry_run: bool) -> Result<SweepResult> {
    let now = Utc::now();
    let conn = db.connection();
    let deactivated = if dry_run {
        reservations::count_expired_in(conn, now)?
    } else {
        reservations::deactivate_expired_in(conn, now)?
    };
    Ok(SweepResult {
        deactivated,
        dry_run,
    })
}
