//! Initialization helpers for application setup.
//!
//! This module provides functions to initialize various application components:
//! - Logger with custom formatting
//! - Data directories (idempotent recursive creation)

mod directories;
mod logger;

pub use directories::{ensure_data_directories_exist, ensure_parent_directory_exists};
pub use logger::init_logger_with;
