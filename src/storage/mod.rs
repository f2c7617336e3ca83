//! Database operations: schema creation, fault-isolated bulk insertion,
//! and read-only query execution.

mod connection;
pub mod identifier;
pub mod insert;
pub mod models;
pub mod query;
pub mod schema;

// Re-export commonly used items
pub use identifier::validate_identifier;
pub use insert::insert_rows;
pub use models::{BatchOutcome, Row, SqlValue};
pub use query::execute_select;
pub use schema::create_database;
