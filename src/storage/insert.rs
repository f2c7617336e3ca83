//! Bulk row insertion with per-row fault isolation.
//!
//! Bulk loads come from imperfect upstream data, so one malformed record
//! must not block the rest of the batch. Each row is attempted and committed
//! individually; failures are counted and logged, never propagated.

use std::path::Path;

use log::{error, info};
use sqlx::error::ErrorKind;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

use crate::error_handling::DatabaseError;
use crate::storage::connection::open_connection;
use crate::storage::identifier::validate_identifier;
use crate::storage::models::{format_row, BatchOutcome, Row, SqlValue};

/// Inserts a batch of rows into `table_name` with row-by-row error handling.
///
/// Builds one parameterized INSERT statement for the whole batch and
/// processes rows sequentially in input order. Each successful row is
/// committed immediately, so a crash mid-batch loses only the rows not yet
/// attempted. A row that violates a constraint (or fails for any other
/// reason) is logged with its 1-based index and values, counted as failed,
/// and the batch continues.
///
/// If the connection itself cannot be established — or the table/column
/// names fail identifier validation — the whole batch is treated as failed:
/// `inserted == 0`, `failed == rows.len()`, with a single ERROR log line.
///
/// Row arity mismatches against `column_names` are not rejected upfront;
/// they surface as row-level failures.
///
/// # Example
///
/// ```no_run
/// use assessment_etl::{insert_rows, SqlValue};
/// # async fn example() {
/// let outcome = insert_rows(
///     std::path::Path::new("generated_data/cny_real_estate.db"),
///     "properties",
///     &["id", "swis_code", "print_key_code"],
///     &[
///         vec![
///             SqlValue::Text("ABC 123".into()),
///             SqlValue::Text("ABC".into()),
///             SqlValue::Text("123".into()),
///         ],
///     ],
/// )
/// .await;
/// println!("{} inserted, {} failed", outcome.inserted, outcome.failed);
/// # }
/// ```
pub async fn insert_rows(
    db_path: &Path,
    table_name: &str,
    column_names: &[&str],
    rows: &[Row],
) -> BatchOutcome {
    let all_failed = BatchOutcome {
        inserted: 0,
        failed: rows.len(),
    };

    let sql = match build_insert_statement(table_name, column_names) {
        Ok(sql) => sql,
        Err(e) => {
            error!("Bulk insert into {table_name} aborted: {e}");
            return all_failed;
        }
    };

    let mut conn = match open_connection(db_path).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("Bulk insert into {table_name} aborted, could not open database: {e}");
            return all_failed;
        }
    };

    let mut outcome = BatchOutcome::default();

    // One row at a time so a bad row does not take the rest of the batch
    // down with it. Autocommit gives per-row durability.
    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;

        let mut query = sqlx::query(&sql);
        for value in row {
            query = bind_value(query, value);
        }

        match query.execute(&mut conn).await {
            Ok(_) => outcome.inserted += 1,
            Err(e) if is_integrity_violation(&e) => {
                error!(
                    "Row {row_number} failed to insert due to an integrity error: {e}. \
                     Row data: {}",
                    format_row(row)
                );
                outcome.failed += 1;
            }
            Err(e) => {
                error!(
                    "Row {row_number} failed to insert due to a general database error: {e}. \
                     Row data: {}",
                    format_row(row)
                );
                outcome.failed += 1;
            }
        }
    }

    info!(
        "Bulk insert into {table_name}: rows_inserted: {}, rows_failed: {}",
        outcome.inserted, outcome.failed
    );

    outcome
}

/// Builds the parameterized INSERT statement shared by every row of a batch.
///
/// Table and column names are validated before interpolation; values are
/// always bound as parameters.
fn build_insert_statement(table_name: &str, column_names: &[&str]) -> Result<String, DatabaseError> {
    validate_identifier(table_name)?;
    for column in column_names {
        validate_identifier(column)?;
    }

    let placeholders = vec!["?"; column_names.len()].join(", ");
    Ok(format!(
        "INSERT INTO {table_name} ({}) VALUES ({placeholders})",
        column_names.join(", ")
    ))
}

/// Binds one scalar value to the next statement parameter.
pub(crate) fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &'q SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Integer(i) => query.bind(*i),
        SqlValue::Real(r) => query.bind(*r),
        SqlValue::Text(s) => query.bind(s.as_str()),
        SqlValue::Blob(bytes) => query.bind(bytes.as_slice()),
    }
}

/// True for constraint failures raised by the storage engine (uniqueness,
/// not-null, foreign key, check), as opposed to generic I/O or syntax errors.
fn is_integrity_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_err) => matches!(
            db_err.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::CheckViolation
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_insert_statement() {
        let sql = build_insert_statement("properties", &["id", "swis_code", "print_key_code"])
            .expect("valid identifiers");
        assert_eq!(
            sql,
            "INSERT INTO properties (id, swis_code, print_key_code) VALUES (?, ?, ?)"
        );
    }

    #[test]
    fn test_build_insert_statement_rejects_bad_table() {
        let result = build_insert_statement("properties; DROP TABLE x", &["id"]);
        assert!(matches!(
            result,
            Err(DatabaseError::InvalidIdentifierError(_))
        ));
    }

    #[test]
    fn test_build_insert_statement_rejects_bad_column() {
        let result = build_insert_statement("properties", &["id", "val) VALUES ('x'); --"]);
        assert!(matches!(
            result,
            Err(DatabaseError::InvalidIdentifierError(_))
        ));
    }
}
