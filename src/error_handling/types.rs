//! Error type definitions.
//!
//! One error enum per external-facing concern. Failures are both logged at
//! the point they occur and returned as typed errors, so callers can react
//! without a log-capturing harness. The one exception is the bulk row
//! loader, whose contract is a pair of counts rather than a `Result`.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error creating a data directory.
    #[error("Data directory creation error: {0}")]
    DirectoryError(#[from] std::io::Error),
}

/// Error types for database setup and bulk-load operations.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum DatabaseError {
    /// A table or column name failed identifier validation.
    #[error("Invalid SQL identifier: {0:?}")]
    InvalidIdentifierError(String),

    /// Error creating the database file or its parent directory.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// Error reading the schema DDL script.
    #[error("Schema script read error: {0}")]
    SchemaReadError(#[from] std::io::Error),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for the read-only query executor.
///
/// A failed query is distinguishable from a query that matched zero rows:
/// zero rows is `Ok` with an empty result set, a failure is this error.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum QueryError {
    /// SQL execution error (connection, syntax, binding).
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// A result column could not be decoded into a scalar value.
    #[error("Failed to decode column {index}: {source}")]
    DecodeError {
        /// Zero-based column index.
        index: usize,
        /// Underlying driver error.
        source: sqlx::Error,
    },
}

/// Error types for S3 sync operations.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum SyncError {
    /// One or more required credential variables are unset; the operation
    /// was skipped before any network I/O.
    #[error("Missing environment variables: {0}")]
    MissingCredentialsError(String),

    /// The S3 download failed (network, missing object, permission).
    #[error("S3 download failed: {0}")]
    DownloadError(String),

    /// The S3 upload failed.
    #[error("S3 upload failed: {0}")]
    UploadError(String),

    /// Local file I/O failed while writing or reading the database file.
    #[error("Local file error: {0}")]
    FileError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_error_names_variables() {
        let e = SyncError::MissingCredentialsError("AWS_ACCESS_KEY_ID, AWS_REGION".to_string());
        let msg = e.to_string();
        assert!(msg.contains("AWS_ACCESS_KEY_ID"));
        assert!(msg.contains("AWS_REGION"));
    }

    #[test]
    fn test_invalid_identifier_error_quotes_name() {
        let e = DatabaseError::InvalidIdentifierError("bad name; --".to_string());
        assert!(e.to_string().contains("bad name; --"));
    }

    #[test]
    fn test_query_decode_error_reports_index() {
        let e = QueryError::DecodeError {
            index: 3,
            source: sqlx::Error::RowNotFound,
        };
        assert!(e.to_string().contains("column 3"));
    }
}
