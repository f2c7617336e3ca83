//! Schema initialization.

use std::path::Path;

use log::{error, info};
use sqlx::Connection;

use crate::error_handling::DatabaseError;
use crate::initialization::ensure_parent_directory_exists;
use crate::storage::connection::create_connection;

/// Creates a new SQLite database and initializes it with the schema script.
///
/// Reads the DDL script at `schema_path` in full and executes it as a
/// multi-statement script against a freshly created database file at
/// `db_path`. Not idempotent: re-running against an existing file surfaces
/// "table already exists" from the engine as a [`DatabaseError::SqlError`].
///
/// Every failure path logs one ERROR line and returns a typed error;
/// success logs one INFO line naming the database path.
pub async fn create_database(schema_path: &Path, db_path: &Path) -> Result<(), DatabaseError> {
    ensure_parent_directory_exists(db_path).map_err(|e| {
        error!("Failed to create database directory: {e}");
        DatabaseError::FileCreationError(e.to_string())
    })?;

    let sql_script = tokio::fs::read_to_string(schema_path).await.map_err(|e| {
        error!(
            "Failed to read schema script {}: {e}",
            schema_path.display()
        );
        DatabaseError::SchemaReadError(e)
    })?;

    let mut conn = create_connection(db_path).await.map_err(|e| {
        error!("Failed to open database {}: {e}", db_path.display());
        DatabaseError::SqlError(e)
    })?;

    sqlx::raw_sql(&sql_script)
        .execute(&mut conn)
        .await
        .map_err(|e| {
            error!("Error creating the database: {e}");
            DatabaseError::SqlError(e)
        })?;

    conn.close().await.map_err(|e| {
        error!("Failed to close database connection: {e}");
        DatabaseError::SqlError(e)
    })?;

    info!("Database created at {}", db_path.display());
    Ok(())
}
