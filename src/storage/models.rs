//! Data model types for the storage layer.

use std::fmt;

/// A scalar value bound into or read out of a SQLite column.
///
/// No coercion happens at this layer; SQLite column affinity applies when a
/// value is bound. Rows are positional: the value at index `i` aligns with
/// the column at index `i` of the column list supplied with the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit float.
    Real(f64),
    /// UTF-8 text.
    Text(String),
    /// Raw bytes.
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Converts a JSON scalar into a `SqlValue`.
    ///
    /// Booleans map to 0/1 the way SQLite stores them. Arrays and objects
    /// have no scalar representation and are rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, String> {
        match value {
            serde_json::Value::Null => Ok(SqlValue::Null),
            serde_json::Value::Bool(b) => Ok(SqlValue::Integer(i64::from(*b))),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(SqlValue::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(SqlValue::Real(f))
                } else {
                    Err(format!("Number out of range: {n}"))
                }
            }
            serde_json::Value::String(s) => Ok(SqlValue::Text(s.clone())),
            other => Err(format!("Not a scalar value: {other}")),
        }
    }

    /// Converts the value into its JSON representation for CLI output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            SqlValue::Null => serde_json::Value::Null,
            SqlValue::Integer(i) => serde_json::Value::from(*i),
            SqlValue::Real(f) => serde_json::Value::from(*f),
            SqlValue::Text(s) => serde_json::Value::from(s.as_str()),
            SqlValue::Blob(bytes) => serde_json::Value::Array(
                bytes.iter().map(|b| serde_json::Value::from(*b)).collect(),
            ),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Integer(i) => write!(f, "{i}"),
            SqlValue::Real(r) => write!(f, "{r}"),
            SqlValue::Text(s) => write!(f, "'{s}'"),
            SqlValue::Blob(bytes) => write!(f, "<blob {} bytes>", bytes.len()),
        }
    }
}

/// One row: an ordered tuple of scalar values.
pub type Row = Vec<SqlValue>;

/// Tally returned by the bulk row loader.
///
/// `inserted + failed` equals the input batch length, except when the
/// connection itself could not be established, in which case `inserted` is
/// zero and `failed` covers the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    /// Rows committed successfully.
    pub inserted: usize,
    /// Rows that failed and were skipped.
    pub failed: usize,
}

/// Formats a row's values for an error log line.
pub(crate) fn format_row(row: &Row) -> String {
    let values: Vec<String> = row.iter().map(ToString::to_string).collect();
    format!("({})", values.join(", "))
}
