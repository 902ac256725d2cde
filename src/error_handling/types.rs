//! Error type definitions.
//!
//! This module defines the error types raised by the store, the exporter and
//! application initialization.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for user store operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The directory holding the database file could not be created.
    #[error("Database directory creation error: {0}")]
    DirectoryCreationError(String),

    /// Opening a connection to the database failed.
    #[error("Database connection error: {0}")]
    ConnectionError(#[source] sqlx::Error),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The requested format is not one of csv, json or pdf.
    #[error("Invalid file type.")]
    UnsupportedFormat(String),

    /// Creating or writing the temporary output file failed.
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// PDF rendering failed.
    #[error("PDF export error: {0}")]
    Pdf(String),

    /// Moving the finished file into place failed.
    #[error("Failed to move export into place: {0}")]
    Persist(#[source] std::io::Error),
}

impl From<tempfile::PersistError> for ExportError {
    fn from(e: tempfile::PersistError) -> Self {
        // Dropping the returned handle removes the temporary file.
        ExportError::Persist(e.error)
    }
}
