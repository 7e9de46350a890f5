// ABOUTME: Utility functions for the nb-beamer application
// ABOUTME: Provides various helper functions for validation, path handling, etc.

use crate::errors::{BeamerError, Result};
use log::warn;
use std::path::Path;

/// Validate that a file exists
pub fn validate_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BeamerError::PathNotFoundError(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(BeamerError::ValidationError(format!(
            "Path is not a file: {:?}",
            path
        )));
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(BeamerError::IoError)?;
    } else if !path.is_dir() {
        return Err(BeamerError::ValidationError(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Validate write permissions for a directory
pub fn validate_directory_writable(path: &Path) -> Result<()> {
    // First ensure it exists
    ensure_directory_exists(path)?;

    // Try to create a temporary file to test write permissions
    let test_file = path.join(format!("test_write_{}.tmp", uuid::Uuid::new_v4()));
    match std::fs::File::create(&test_file) {
        Ok(_) => {
            // Clean up the test file
            if let Err(e) = std::fs::remove_file(&test_file) {
                warn!("Failed to clean up test file {:?}: {}", test_file, e);
            }
            Ok(())
        }
        Err(e) => Err(BeamerError::ValidationError(format!(
            "Directory is not writable: {:?} - {}",
            path, e
        ))),
    }
}
