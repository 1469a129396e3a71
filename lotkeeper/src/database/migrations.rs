//! Database schema management and migrations.
//!
//! This module handles database schema initialization, version checking,
//! and migrations.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_METADATA_TABLE, CREATE_OPEN_SESSION_INDEX, CREATE_RESERVATIONS_TABLE,
    CREATE_RESERVATION_EXPIRY_INDEX, CREATE_RESERVATION_VEHICLE_INDEX, CREATE_SESSIONS_TABLE,
    CREATE_SESSION_EXIT_INDEX, CREATE_VEHICLES_TABLE, CURRENT_SCHEMA_VERSION,
    INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// This function creates all tables, indices, and metadata for a fresh
/// database. It should only be called on a database that has not been
/// initialized yet.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use lotkeeper::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    // Create tables
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_VEHICLES_TABLE, [])?;
    conn.execute(CREATE_SESSIONS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;

    // Create indices
    conn.execute(CREATE_OPEN_SESSION_INDEX, [])?;
    conn.execute(CREATE_SESSION_EXIT_INDEX, [])?;
    conn.execute(CREATE_RESERVATION_VEHICLE_INDEX, [])?;
    conn.execute(CREATE_RESERVATION_EXPIRY_INDEX, [])?;

    // Set initial schema version
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than
/// "no rows returned" (which indicates version 0).
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
/// - `Err(_)` if a database error occurs
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            // Database exists but no schema - needs initialization
            Ok(0)
        }
        Err(e) => {
            // Check if it's a "no such table" error
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    // Table doesn't exist yet
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// This function:
/// 1. Checks the current schema version
/// 2. If version is 0, initializes the schema
/// 3. If version is older than current, returns an error (migrations needed)
/// 4. If version is newer than current, returns an error (client too old)
/// 5. If version matches, returns success
///
/// # Errors
///
/// Returns an error if:
/// - Schema version is incompatible (too old or too new)
/// - Schema initialization fails
/// - Database queries fail
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        // Fresh database, initialize it
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        #[allow(clippy::cast_sign_loss)]
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION as u32,
            found: version as u32,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_connection() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_initialize_schema() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        // Verify metadata table exists and has the current version
        let version = get_schema_version(&conn).unwrap();
        assert_eq!(version, CURRENT_SCHEMA_VERSION);

        // Verify all tables exist
        for table in ["metadata", "vehicles", "sessions", "reservations"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "table {table} should exist");
        }
    }

    #[test]
    fn test_get_schema_version_uninitialized() {
        let conn = create_test_connection();
        assert_eq!(get_schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_check_schema_compatibility_initializes_fresh() {
        let conn = create_test_connection();
        check_schema_compatibility(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_SCHEMA_VERSION);

        // Idempotent on an initialized database
        check_schema_compatibility(&conn).unwrap();
    }

    #[test]
    fn test_check_schema_compatibility_rejects_newer() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();
        conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION + 1])
            .unwrap();

        let err = check_schema_compatibility(&conn).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedSchemaVersion { .. }
        ));
    }

    #[test]
    fn test_open_session_index_is_unique() {
        let conn = create_test_connection();
        initialize_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO vehicles (plate, category, owner_name, owner_role)
             VALUES ('ABC123', 'car', 'Ana', 'resident')",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO sessions (vehicle_id, zone, entered_at) VALUES (1, 'inside', 100)",
            [],
        )
        .unwrap();

        // A second open session for the same vehicle violates the index
        let result = conn.execute(
            "INSERT INTO sessions (vehicle_id, zone, entered_at) VALUES (1, 'outside', 200)",
            [],
        );
        assert!(result.is_err());

        // Closing the first allows a new open session
        conn.execute("UPDATE sessions SET exited_at = 300 WHERE id = 1", [])
            .unwrap();
        conn.execute(
            "INSERT INTO sessions (vehicle_id, zone, entered_at) VALUES (1, 'outside', 400)",
            [],
        )
        .unwrap();
    }
}
