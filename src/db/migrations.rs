// src/db/migrations.rs
//
// Versioned schema initialization. There are no automatic migrations: a
// version the code does not know is an error, never a guess.

use rusqlite::{params, Connection};

use crate::error::{AppError, AppResult};

/// Schema version this build reads and writes.
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Version-1 schema, embedded at compile time.
const SCHEMA: &str = include_str!("../../schema.sql");

/// Bring the database up to the current schema version.
///
/// A fresh database gets the embedded schema and a version row. A database
/// at the current version passes through untouched, so startup can call
/// this unconditionally. Any other version is refused with instructions.
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    let found = get_schema_version(conn)?;

    match found.cmp(&CURRENT_SCHEMA_VERSION) {
        std::cmp::Ordering::Equal => Ok(()),
        std::cmp::Ordering::Less if found == 0 => {
            apply_initial_schema(conn)?;
            set_schema_version(conn, CURRENT_SCHEMA_VERSION)
        }
        std::cmp::Ordering::Less => Err(AppError::Other(format!(
            "Database schema is at version {} but version {} is required; migrate it manually",
            found, CURRENT_SCHEMA_VERSION
        ))),
        std::cmp::Ordering::Greater => Err(AppError::Other(format!(
            "Database schema version {} was written by a newer build (this one supports {})",
            found, CURRENT_SCHEMA_VERSION
        ))),
    }
}

/// Recorded schema version, 0 when the version table itself is absent.
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let tracked: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
        [],
        |row| row.get(0),
    )?;

    if tracked == 0 {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;

    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at)
         VALUES (?1, datetime('now'))",
        params![version],
    )?;

    Ok(())
}

fn apply_initial_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)
        .map_err(|e| AppError::Other(format!("Could not apply the initial schema: {}", e)))
}

/// Run SQLite's own integrity check; anything but "ok" is an error.
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let verdict: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

    if verdict != "ok" {
        return Err(AppError::Other(format!(
            "Database integrity check failed: {}",
            verdict
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_in_memory_pool;

    #[test]
    fn test_fresh_database_reaches_version_one() {
        let pool = create_in_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 0);

        initialize_database(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 1);

        // The key-value table must exist afterwards
        let kv_exists: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(kv_exists, 1);
    }

    #[test]
    fn test_initialization_is_idempotent() {
        let pool = create_in_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        initialize_database(&conn).unwrap();
        initialize_database(&conn).unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), 1);
    }

    #[test]
    fn test_newer_schema_version_is_refused() {
        let pool = create_in_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        initialize_database(&conn).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version, applied_at) VALUES (99, datetime('now'))",
            [],
        )
        .unwrap();

        assert!(initialize_database(&conn).is_err());
    }

    #[test]
    fn test_integrity_check_passes_on_fresh_database() {
        let pool = create_in_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        initialize_database(&conn).unwrap();

        verify_database_integrity(&conn).unwrap();
    }
}
