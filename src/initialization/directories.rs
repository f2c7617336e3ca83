//! Data directory provisioning.

use std::path::Path;

use crate::config::{EXTRACTED_DATA_DIR, GENERATED_DATA_DIR};

/// Ensures the extracted and generated data directories exist.
///
/// Creates both directories recursively. Idempotent: directories that
/// already exist are left untouched and do not produce an error.
pub fn ensure_data_directories_exist() -> std::io::Result<()> {
    std::fs::create_dir_all(EXTRACTED_DATA_DIR)?;
    std::fs::create_dir_all(GENERATED_DATA_DIR)?;
    Ok(())
}

/// Ensures the parent directory of `path` exists.
///
/// Used before creating or overwriting the database file at a caller-chosen
/// location. A path with no parent component is a no-op.
pub fn ensure_parent_directory_exists(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_parent_directory_exists_creates_nested_dirs() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let target = tmp.path().join("a/b/c.db");

        ensure_parent_directory_exists(&target).expect("first call");
        assert!(tmp.path().join("a/b").is_dir());

        // Second call is a no-op, not an error
        ensure_parent_directory_exists(&target).expect("second call");
    }

    #[test]
    fn test_ensure_parent_directory_exists_bare_filename() {
        // A bare file name has an empty parent; nothing to create
        ensure_parent_directory_exists(Path::new("just_a_file.db")).expect("bare filename");
    }
}
