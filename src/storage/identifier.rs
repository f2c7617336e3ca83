//! SQL identifier validation.
//!
//! Table and column names cannot be bound as statement parameters, so the
//! bulk loader interpolates them into the INSERT text. Every name is checked
//! against a strict allow-list pattern first; bound values remain
//! parameterized as usual.

use crate::error_handling::DatabaseError;

/// Validates a table or column name before SQL interpolation.
///
/// Accepts `[A-Za-z_][A-Za-z0-9_]*`. Anything else — empty strings, leading
/// digits, whitespace, quoting or punctuation — is rejected with
/// [`DatabaseError::InvalidIdentifierError`].
pub fn validate_identifier(name: &str) -> Result<(), DatabaseError> {
    let mut chars = name.chars();

    let valid_first = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid_first && valid_rest {
        Ok(())
    } else {
        Err(DatabaseError::InvalidIdentifierError(name.to_string()))
    }
}
