//! File download handler.

use std::path::Path;

use axum::{
    extract::{Path as UrlPath, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use log::{debug, info, warn};
use tempfile::TempPath;

use super::super::error::WebError;
use super::super::types::AppState;
use crate::export::{export, ExportFormat};

/// A per-request export file that is deleted when dropped.
///
/// Every exit from the handler, including early returns on error, drops the
/// guard and removes the file.
struct ExportFile {
    path: Option<TempPath>,
}

impl ExportFile {
    fn create(dir: &Path, format: ExportFormat) -> Result<Self, std::io::Error> {
        let path = tempfile::Builder::new()
            .prefix("users-")
            .suffix(&format!(".{}", format.extension()))
            .tempfile_in(dir)?
            .into_temp_path();
        Ok(Self { path: Some(path) })
    }

    fn path(&self) -> &Path {
        self.path
            .as_deref()
            .unwrap_or_else(|| Path::new(""))
    }
}

impl Drop for ExportFile {
    fn drop(&mut self) {
        if let Some(path) = self.path.take() {
            let shown = path.to_path_buf();
            match path.close() {
                Ok(()) => debug!("Removed export file {}", shown.display()),
                Err(e) => warn!("Failed to remove export file {}: {e}", shown.display()),
            }
        }
    }
}

/// Exports all users in the requested format and returns the file as a download.
///
/// Unknown formats are rejected before the store is queried.
pub async fn export_handler(
    State(state): State<AppState>,
    UrlPath(format): UrlPath<String>,
) -> Result<Response, WebError> {
    let format: ExportFormat = format.parse().map_err(|_| {
        warn!("Rejected export request for unknown format {format:?}");
        WebError::InvalidFileType(format.clone())
    })?;

    let users = state.store.get_users().await?;
    let count = users.len();

    let file = ExportFile::create(state.export_dir(), format)?;
    let target = file.path().to_path_buf();
    tokio::task::spawn_blocking(move || export(&users, &target, format))
        .await
        .map_err(|e| WebError::Task(e.to_string()))??;

    // Read the whole file before the guard deletes it, so removal never
    // races with the response body.
    let body = tokio::fs::read(file.path()).await?;
    drop(file);

    info!("Serving {count} user(s) as {format}");
    let headers = [
        (header::CONTENT_TYPE, format.content_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", format.file_name()),
        ),
    ];
    Ok((StatusCode::OK, headers, body).into_response())
}
