//! Configuration constants.
//!
//! Fixed filesystem locations and object-store addressing used throughout
//! the application. The database lives at a single well-known local path and
//! is mirrored to a single well-known S3 location.

/// Directory for raw data extracted from upstream sources.
pub const EXTRACTED_DATA_DIR: &str = "extracted_data";

/// Directory for generated artifacts, including the SQLite database itself.
pub const GENERATED_DATA_DIR: &str = "generated_data";

/// File name of the SQLite database, used both locally and as the S3 object key.
pub const SQLITE_DB_NAME: &str = "cny_real_estate.db";

/// Local path of the SQLite database file.
pub const DB_LOCAL_PATH: &str = "generated_data/cny_real_estate.db";

/// Path of the DDL script that defines the database schema.
pub const CREATE_TABLE_DEFINITIONS_FILE_PATH: &str = "schema/create_table_definitions.sql";

/// S3 bucket holding the mirrored database file.
pub const S3_BUCKET_NAME: &str = "cny-real-estate-data";

// Table names
/// Municipality assessment ratios table.
pub const ASSESSMENT_RATIOS_TABLE: &str = "municipality_assessment_ratios";
/// Annual property assessment rolls table.
pub const NY_PROPERTY_ASSESSMENTS_TABLE: &str = "ny_property_assessments";
/// Properties table.
pub const PROPERTIES_TABLE: &str = "properties";
