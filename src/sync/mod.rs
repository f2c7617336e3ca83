//! Remote sync: mirrors the database file against an S3 bucket.
//!
//! Sync is gated on the presence of a complete credential set; see
//! [`crate::config::AwsCredentials::from_env`]. Missing credentials skip the
//! operation before any network I/O is attempted.

mod client;

pub use client::SyncClient;
