//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (fixed paths, bucket/key, table names)
//! - CLI option types
//! - The AWS credential struct consumed by the sync client

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{AwsCredentials, LogFormat, LogLevel};
