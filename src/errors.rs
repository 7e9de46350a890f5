// ABOUTME: Error types for the nb-beamer application
// ABOUTME: Provides structured error handling for each stage of the pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeamerError {
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse notebook JSON: {0}")]
    NotebookError(#[from] serde_json::Error),

    #[error("Unknown theme '{name}'. Available themes: {available}")]
    UnknownTheme { name: String, available: String },

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Compilation error: {0}")]
    CompileError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our BeamerError
impl From<anyhow::Error> for BeamerError {
    fn from(err: anyhow::Error) -> Self {
        BeamerError::UnknownError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BeamerError>;
