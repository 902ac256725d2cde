//! Web server data structures.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::storage::UserStore;

/// Shared state for the web server
#[derive(Clone, Debug)]
pub struct AppState {
    /// Store every handler reads from and writes to
    pub store: UserStore,
    /// Directory for per-request export files
    pub export_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates state for a store and an existing export directory.
    pub fn new(store: UserStore, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            export_dir: Arc::new(export_dir.into()),
        }
    }

    /// Directory for per-request export files.
    pub fn export_dir(&self) -> &Path {
        self.export_dir.as_path()
    }
}

/// Form body for `POST /add`
#[derive(Debug, Deserialize)]
pub struct NewUserForm {
    pub name: String,
    pub email: String,
}
