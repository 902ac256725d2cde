//! Mapping of component errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use thiserror::Error;

use crate::config::INVALID_FILE_TYPE_MESSAGE;
use crate::error_handling::{ExportError, StorageError};

/// Errors a handler can return.
///
/// Only an unknown export format is reported to the client as such; every
/// other failure is logged and answered with a generic 500.
#[derive(Error, Debug)]
pub enum WebError {
    /// The `{format}` path segment is not csv, json or pdf.
    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Export file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export task failed: {0}")]
    Task(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::InvalidFileType(_) | WebError::Export(ExportError::UnsupportedFormat(_)) => {
                (StatusCode::BAD_REQUEST, INVALID_FILE_TYPE_MESSAGE).into_response()
            }
            other => {
                error!("Request failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
