//! Database connection management.
//!
//! Every database-touching call opens and closes its own connection; there
//! is no pooling. The database file is assumed exclusively owned by this
//! process for the duration of any call.

use std::path::Path;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, SqliteConnection};

/// Opens a connection to an existing database file.
///
/// Does not create the file: connecting to a missing or unreachable path is
/// an error, which callers treat as a connection-level failure.
pub(crate) async fn open_connection(db_path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    SqliteConnectOptions::new()
        .filename(db_path)
        .connect()
        .await
}

/// Opens a connection, creating the database file if it does not exist.
///
/// Used only by the schema initializer.
pub(crate) async fn create_connection(db_path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .connect()
        .await
}
