//! Configuration types and CLI options.
//!
//! This module defines the enums used for command-line argument parsing and
//! the AWS credential struct consumed by the sync client.

use clap::ValueEnum;
use log::error;

use crate::error_handling::SyncError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// AWS credentials required for S3 sync operations.
///
/// All three values must be present together. The struct is built once at
/// startup and passed by reference into the sync client, rather than read
/// from the environment ad hoc per call.
#[derive(Debug, Clone)]
pub struct AwsCredentials {
    /// `AWS_ACCESS_KEY_ID`
    pub access_key_id: String,
    /// `AWS_SECRET_ACCESS_KEY`
    pub secret_access_key: String,
    /// `AWS_REGION`
    pub region: String,
}

impl AwsCredentials {
    /// Reads the three required credential values from the process environment.
    ///
    /// Each missing (or empty) variable is logged individually. If any is
    /// absent the whole set is treated as absent and
    /// [`SyncError::MissingCredentialsError`] names every missing variable,
    /// so the calling operation can skip remote sync before any I/O is
    /// attempted.
    pub fn from_env() -> Result<Self, SyncError> {
        let mut missing = Vec::new();

        let access_key_id = read_required_var("AWS_ACCESS_KEY_ID", &mut missing);
        let secret_access_key = read_required_var("AWS_SECRET_ACCESS_KEY", &mut missing);
        let region = read_required_var("AWS_REGION", &mut missing);

        if !missing.is_empty() {
            return Err(SyncError::MissingCredentialsError(missing.join(", ")));
        }

        Ok(Self {
            access_key_id,
            secret_access_key,
            region,
        })
    }
}

/// Reads one environment variable, recording and logging its absence.
/// An empty value counts as absent.
fn read_required_var(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            error!("Missing {name} environment variable.");
            missing.push(name);
            String::new()
        }
    }
}
