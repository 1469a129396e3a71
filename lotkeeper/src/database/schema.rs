//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the lotkeeper system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the vehicles table.
///
/// One row per registered vehicle. Plates are unique; the owner role is
/// stored denormalized on the vehicle because it is fixed at registration
/// and read on every admission.
pub const CREATE_VEHICLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        plate TEXT NOT NULL UNIQUE,
        category TEXT NOT NULL,
        make TEXT,
        model TEXT,
        owner_name TEXT NOT NULL,
        owner_role TEXT NOT NULL
    )";

/// SQL statement to create the sessions table.
///
/// One row per parking stay. A session is open while `exited_at` is NULL;
/// `elapsed_minutes` and `amount` are filled in when it closes.
pub const CREATE_SESSIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS sessions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle_id INTEGER NOT NULL REFERENCES vehicles(id),
        zone TEXT NOT NULL,
        entered_at INTEGER NOT NULL,
        exited_at INTEGER,
        elapsed_minutes INTEGER,
        amount INTEGER
    )";

/// SQL statement to create the reservations table.
///
/// `active` is 1 until the reservation is redeemed at entry or deactivated
/// by the expiry sweep. Expired rows may linger with `active = 1` until
/// one of those happens, so readers must also compare `expires_at`.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vehicle_id INTEGER NOT NULL REFERENCES vehicles(id),
        reserved_at INTEGER NOT NULL,
        expires_at INTEGER NOT NULL,
        active INTEGER NOT NULL DEFAULT 1
    )";

/// SQL statement to create the unique open-session index.
///
/// Backs the one-open-session-per-vehicle invariant at the storage level,
/// in addition to the transactional check at admission.
pub const CREATE_OPEN_SESSION_INDEX: &str = r"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_sessions_open_vehicle
    ON sessions(vehicle_id) WHERE exited_at IS NULL";

/// SQL statement to create an index on the session exit column.
///
/// This index speeds up occupancy tallies and monthly revenue queries.
pub const CREATE_SESSION_EXIT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_sessions_exited ON sessions(exited_at)";

/// SQL statement to create an index on active reservations per vehicle.
///
/// This index speeds up the redemption lookup at admission.
pub const CREATE_RESERVATION_VEHICLE_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_vehicle_active
    ON reservations(vehicle_id, active)";

/// SQL statement to create an index on reservation expiry.
///
/// This index speeds up the expiry sweep.
pub const CREATE_RESERVATION_EXPIRY_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_expiry
    ON reservations(expires_at) WHERE active = 1";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
