//! Shared helpers for integration tests.
//!
//! Each test gets a throwaway directory holding a schema script and a fresh
//! database file, so tests never touch the fixed production paths.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use assessment_etl::create_database;

/// A fresh database in a temporary directory, kept alive for the test's
/// duration by the `TempDir` guard.
pub struct TestDb {
    pub dir: TempDir,
    pub db_path: PathBuf,
}

/// Creates a database from the given DDL and returns its location.
pub async fn setup_db(ddl: &str) -> TestDb {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let schema_path = dir.path().join("schema.sql");
    tokio::fs::write(&schema_path, ddl)
        .await
        .expect("failed to write schema script");

    let db_path = dir.path().join("test.db");
    create_database(&schema_path, &db_path)
        .await
        .expect("failed to create test database");

    TestDb { dir, db_path }
}

/// DDL matching the end-to-end scenario: a two-column table with a text
/// primary key.
pub const KEYED_TABLE_DDL: &str = "CREATE TABLE t (id TEXT PRIMARY KEY, val TEXT);";
