//! Error type definitions for all components.

mod types;

pub use types::{DatabaseError, InitializationError, QueryError, SyncError};
