//! PostgreSQL schema definitions and migrations.

use crate::error::{BackendError, StorageError, StorageResult};
use crate::seed::DEFAULT_CATEGORIES;

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 2;

fn pg_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::MigrationError { message })
}

/// Initialize the database schema.
pub async fn initialize_schema(client: &deadpool_postgres::Client) -> StorageResult<()> {
    let current_version = get_schema_version(client).await?;

    if current_version == 0 {
        create_schema_v1(client).await?;
        set_schema_version(client, 1).await?;
        migrate_schema(client, 1).await?;
    } else if current_version < SCHEMA_VERSION {
        migrate_schema(client, current_version).await?;
    }

    Ok(())
}

/// Get the current schema version.
async fn get_schema_version(client: &deadpool_postgres::Client) -> StorageResult<i32> {
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER NOT NULL
            )",
            &[],
        )
        .await
        .map_err(|e| pg_error(format!("Failed to create schema_version table: {}", e)))?;

    let row = client
        .query_opt("SELECT version FROM schema_version LIMIT 1", &[])
        .await
        .map_err(|e| pg_error(format!("Failed to query schema version: {}", e)))?;

    Ok(row.map(|r| r.get::<_, i32>(0)).unwrap_or(0))
}

/// Set the schema version.
async fn set_schema_version(client: &deadpool_postgres::Client, version: i32) -> StorageResult<()> {
    client
        .execute("DELETE FROM schema_version", &[])
        .await
        .map_err(|e| pg_error(format!("Failed to clear schema_version: {}", e)))?;

    client
        .execute(
            "INSERT INTO schema_version (version) VALUES ($1)",
            &[&version],
        )
        .await
        .map_err(|e| pg_error(format!("Failed to set schema_version: {}", e)))?;

    Ok(())
}

/// Create the initial schema (version 1) and seed the categories.
async fn create_schema_v1(client: &deadpool_postgres::Client) -> StorageResult<()> {
    client
        .batch_execute(
            "CREATE TABLE IF NOT EXISTS categories (
                id BIGINT PRIMARY KEY,
                type TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS questions (
                id BIGSERIAL PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category TEXT NOT NULL,
                difficulty BIGINT NOT NULL
            );",
        )
        .await
        .map_err(|e| pg_error(format!("Failed to create tables: {}", e)))?;

    for (id, kind) in DEFAULT_CATEGORIES {
        client
            .execute(
                "INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
                &[&id, &kind],
            )
            .await
            .map_err(|e| pg_error(format!("Failed to seed category {}: {}", kind, e)))?;
    }

    Ok(())
}

/// Run migrations from `from_version` up to [`SCHEMA_VERSION`].
async fn migrate_schema(client: &deadpool_postgres::Client, from_version: i32) -> StorageResult<()> {
    let mut version = from_version;

    while version < SCHEMA_VERSION {
        match version {
            1 => {
                client
                    .execute(
                        "CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)",
                        &[],
                    )
                    .await
                    .map_err(|e| pg_error(format!("Failed to create category index: {}", e)))?;
            }
            _ => {
                return Err(pg_error(format!(
                    "No migration path from schema version {}",
                    version
                )));
            }
        }
        version += 1;
        set_schema_version(client, version).await?;
        tracing::debug!(version, "Applied PostgreSQL schema migration");
    }

    Ok(())
}
