//! assessment_etl library: SQLite provisioning, fault-isolated bulk loading,
//! and S3 mirroring for the CNY real-estate assessment database.
//!
//! The crate provisions a local SQLite database from a DDL script,
//! bulk-inserts rows so that one bad record never aborts a batch, answers
//! ad-hoc read queries, and mirrors the database file against a fixed S3
//! location at session boundaries.
//!
//! # Example
//!
//! ```no_run
//! use assessment_etl::{create_database, insert_rows, SqlValue};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = Path::new("schema/create_table_definitions.sql");
//! let db = Path::new("generated_data/cny_real_estate.db");
//!
//! create_database(schema, db).await?;
//!
//! let outcome = insert_rows(
//!     db,
//!     "properties",
//!     &["id", "swis_code", "print_key_code"],
//!     &[vec![
//!         SqlValue::Text("ABC 123".into()),
//!         SqlValue::Text("ABC".into()),
//!         SqlValue::Text("123".into()),
//!     ]],
//! )
//! .await;
//! println!("{} inserted, {} failed", outcome.inserted, outcome.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context. Operations are logically sequential: each call opens its own
//! connection and runs to completion before the next begins.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod storage;
pub mod sync;

// Re-export public API
pub use config::{AwsCredentials, LogFormat, LogLevel};
pub use error_handling::{DatabaseError, InitializationError, QueryError, SyncError};
pub use storage::{create_database, execute_select, insert_rows, BatchOutcome, Row, SqlValue};
pub use sync::SyncClient;
