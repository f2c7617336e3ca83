//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `assessment_etl` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::error;

use assessment_etl::config::{
    AwsCredentials, LogFormat, LogLevel, CREATE_TABLE_DEFINITIONS_FILE_PATH, DB_LOCAL_PATH,
    S3_BUCKET_NAME, SQLITE_DB_NAME,
};
use assessment_etl::initialization::{ensure_data_directories_exist, init_logger_with};
use assessment_etl::{create_database, execute_select, insert_rows, Row, SqlValue, SyncClient};

#[derive(Parser)]
#[command(name = "assessment_etl", version, about)]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    /// Path of the SQLite database file
    #[arg(long, default_value = DB_LOCAL_PATH)]
    db_path: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the database file and apply the schema script
    Init {
        /// Path of the DDL script
        #[arg(long, default_value = CREATE_TABLE_DEFINITIONS_FILE_PATH)]
        schema: PathBuf,
    },
    /// Bulk-insert rows from a JSON-lines file with per-row fault isolation
    Load {
        /// Target table name
        #[arg(long)]
        table: String,

        /// Comma-separated column list, positionally aligned with each row
        #[arg(long, value_delimiter = ',', required = true)]
        columns: Vec<String>,

        /// JSON-lines file: one JSON array of scalars per line
        input: PathBuf,
    },
    /// Run a read-only SQL statement and print matching rows as JSON
    Query {
        /// The SELECT statement to execute
        sql: String,

        /// Positional parameter bound to a `?` placeholder (repeatable)
        #[arg(long = "param")]
        params: Vec<String>,
    },
    /// Download the database file from S3, overwriting the local copy
    Pull,
    /// Upload the local database file to S3
    Push,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so AWS
    // credentials can be configured without exporting them manually
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("assessment_etl error: {e:#}");
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init { schema } => {
            ensure_data_directories_exist().context("Failed to create data directories")?;
            create_database(&schema, &cli.db_path).await?;
            println!("Database created at {}", cli.db_path.display());
        }
        Command::Load {
            table,
            columns,
            input,
        } => {
            let rows = read_rows_file(&input)?;
            let column_refs: Vec<&str> = columns.iter().map(String::as_str).collect();
            let outcome = insert_rows(&cli.db_path, &table, &column_refs, &rows).await;
            println!(
                "{} row{} inserted, {} failed",
                outcome.inserted,
                if outcome.inserted == 1 { "" } else { "s" },
                outcome.failed
            );
        }
        Command::Query { sql, params } => {
            let params: Vec<SqlValue> = params.into_iter().map(SqlValue::Text).collect();
            let rows = execute_select(&cli.db_path, &sql, &params).await?;
            for row in &rows {
                let values: Vec<serde_json::Value> = row.iter().map(SqlValue::to_json).collect();
                println!("{}", serde_json::Value::Array(values));
            }
        }
        Command::Pull => {
            ensure_data_directories_exist().context("Failed to create data directories")?;
            match AwsCredentials::from_env() {
                Ok(credentials) => {
                    let client = SyncClient::new(
                        &credentials,
                        S3_BUCKET_NAME,
                        SQLITE_DB_NAME,
                        &cli.db_path,
                    );
                    client.download().await?;
                    println!("Database downloaded to {}", cli.db_path.display());
                }
                Err(e) => error!("Unable to create S3 client ({e}). Skipping download."),
            }
        }
        Command::Push => match AwsCredentials::from_env() {
            Ok(credentials) => {
                let client =
                    SyncClient::new(&credentials, S3_BUCKET_NAME, SQLITE_DB_NAME, &cli.db_path);
                client.upload().await?;
                println!("Database uploaded to s3://{S3_BUCKET_NAME}/{SQLITE_DB_NAME}");
            }
            Err(e) => error!("Unable to create S3 client ({e}). Skipping upload."),
        },
    }

    Ok(())
}

/// Parses a JSON-lines file into rows: one JSON array of scalars per line.
/// Blank lines and `#` comments are skipped. A malformed line is a caller
/// error and fails the whole command before any database work starts.
fn read_rows_file(path: &PathBuf) -> Result<Vec<Row>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;

    let mut rows = Vec::new();
    for (line_number, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parsed: serde_json::Value = serde_json::from_str(trimmed)
            .with_context(|| format!("Line {}: not valid JSON", line_number + 1))?;
        let serde_json::Value::Array(values) = parsed else {
            bail!("Line {}: expected a JSON array of scalars", line_number + 1);
        };

        let row = values
            .iter()
            .map(SqlValue::from_json)
            .collect::<Result<Row, String>>()
            .map_err(|e| anyhow::anyhow!("Line {}: {e}", line_number + 1))?;
        rows.push(row);
    }

    Ok(rows)
}
