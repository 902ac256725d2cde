//! Error handling.
//!
//! Typed errors for each component. Neither the store nor the exporter retries
//! or recovers; errors propagate to the caller (the HTTP layer or the CLI),
//! which decides how to report them.

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError, StorageError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let err = ExportError::UnsupportedFormat("xml".to_string());
        assert_eq!(err.to_string(), "Invalid file type.");
    }

    #[test]
    fn test_storage_error_from_sqlx() {
        let err: StorageError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StorageError::SqlError(_)));
        assert!(err.to_string().starts_with("SQL error"));
    }

    #[test]
    fn test_export_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExportError = io.into();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
