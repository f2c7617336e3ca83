//! Read-only query execution.

use std::path::Path;

use log::error;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row as _, TypeInfo, ValueRef};

use crate::error_handling::QueryError;
use crate::storage::connection::open_connection;
use crate::storage::insert::bind_value;
use crate::storage::models::{Row, SqlValue};

/// Executes a single SELECT statement and returns all matching rows.
///
/// Non-empty `params` bind positionally to `?` placeholders. On success the
/// full result set is returned as ordered rows of ordered values; a query
/// that matches zero rows returns `Ok` with an empty vec, which is
/// distinguishable from a failed query (`Err`, with the query text and
/// error logged).
pub async fn execute_select(
    db_path: &Path,
    query: &str,
    params: &[SqlValue],
) -> Result<Vec<Row>, QueryError> {
    let mut conn = open_connection(db_path).await.map_err(|e| {
        error!("Query {query} failed, database error: {e}.");
        QueryError::SqlError(e)
    })?;

    let mut prepared = sqlx::query(query);
    for param in params {
        prepared = bind_value(prepared, param);
    }

    let rows = prepared.fetch_all(&mut conn).await.map_err(|e| {
        error!("Query {query} failed, database error: {e}.");
        QueryError::SqlError(e)
    })?;

    rows.iter()
        .map(decode_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            error!("Query {query} failed, database error: {e}.");
            e
        })
}

/// Decodes one result row into scalar values, following the storage class
/// of each value rather than the declared column type.
fn decode_row(row: &SqliteRow) -> Result<Row, QueryError> {
    let mut values = Vec::with_capacity(row.len());

    for index in 0..row.len() {
        let raw = row
            .try_get_raw(index)
            .map_err(|source| QueryError::DecodeError { index, source })?;

        let value = if raw.is_null() {
            SqlValue::Null
        } else {
            let type_name = raw.type_info().name().to_string();
            match type_name.as_str() {
                "INTEGER" | "BOOLEAN" => SqlValue::Integer(
                    row.try_get(index)
                        .map_err(|source| QueryError::DecodeError { index, source })?,
                ),
                "REAL" => SqlValue::Real(
                    row.try_get(index)
                        .map_err(|source| QueryError::DecodeError { index, source })?,
                ),
                "BLOB" => SqlValue::Blob(
                    row.try_get(index)
                        .map_err(|source| QueryError::DecodeError { index, source })?,
                ),
                _ => SqlValue::Text(
                    row.try_get(index)
                        .map_err(|source| QueryError::DecodeError { index, source })?,
                ),
            }
        };

        values.push(value);
    }

    Ok(values)
}
