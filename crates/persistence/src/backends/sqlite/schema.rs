//! SQLite schema definitions and migrations.

use rusqlite::{Connection, params};

use crate::error::{BackendError, StorageError, StorageResult};
use crate::seed::DEFAULT_CATEGORIES;

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 2;

fn schema_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::MigrationError { message })
}

/// Initialize the database schema.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        // Fresh database - create base schema then run all migrations
        create_schema_v1(conn)?;
        set_schema_version(conn, 1)?;
        migrate_schema(conn, 1)?;
    } else if current_version < SCHEMA_VERSION {
        migrate_schema(conn, current_version)?;
    }

    Ok(())
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> StorageResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| schema_error(format!("Failed to create schema_version table: {}", e)))?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| schema_error(format!("Failed to clear schema_version: {}", e)))?;

    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )
    .map_err(|e| schema_error(format!("Failed to set schema_version: {}", e)))?;

    Ok(())
}

/// Create the initial schema (version 1) and seed the categories.
fn create_schema_v1(conn: &Connection) -> StorageResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY,
            type TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| schema_error(format!("Failed to create categories table: {}", e)))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category TEXT NOT NULL,
            difficulty INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| schema_error(format!("Failed to create questions table: {}", e)))?;

    for (id, kind) in DEFAULT_CATEGORIES {
        conn.execute(
            "INSERT OR IGNORE INTO categories (id, type) VALUES (?1, ?2)",
            params![id, kind],
        )
        .map_err(|e| schema_error(format!("Failed to seed category {}: {}", kind, e)))?;
    }

    Ok(())
}

/// Run migrations from `from_version` up to [`SCHEMA_VERSION`].
fn migrate_schema(conn: &Connection, from_version: i32) -> StorageResult<()> {
    let mut version = from_version;

    while version < SCHEMA_VERSION {
        match version {
            1 => migrate_v1_to_v2(conn)?,
            _ => {
                return Err(schema_error(format!(
                    "No migration path from schema version {}",
                    version
                )));
            }
        }
        version += 1;
        set_schema_version(conn, version)?;
        tracing::debug!(version, "Applied SQLite schema migration");
    }

    Ok(())
}

/// v2: index questions by category for filtered listing and quiz pools.
fn migrate_v1_to_v2(conn: &Connection) -> StorageResult<()> {
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)",
        [],
    )
    .map_err(|e| schema_error(format!("Failed to create category index: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_schema_reaches_current_version() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_categories_seeded_once() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        initialize_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, DEFAULT_CATEGORIES.len() as i64);

        let art: String = conn
            .query_row("SELECT type FROM categories WHERE id = 2", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(art, "Art");
    }

    #[test]
    fn test_migration_from_v1() {
        let conn = Connection::open_in_memory().unwrap();
        get_schema_version(&conn).unwrap();
        create_schema_v1(&conn).unwrap();
        set_schema_version(&conn, 1).unwrap();

        initialize_schema(&conn).unwrap();

        let index_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = 'idx_questions_category'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(index_count, 1);
        assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }
}
