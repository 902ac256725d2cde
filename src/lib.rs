//! user_export library: store user records and export them
//!
//! This library keeps `(id, name, email)` records in a SQLite table and renders
//! them on demand as CSV, JSON or a one-page PDF report. A small axum router
//! exposes both over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use user_export::{export, ExportFormat, UserStore};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = UserStore::new("users.db");
//! store.initialize().await?;
//! store.add_user("Ann", "a@x.com").await?;
//!
//! let users = store.get_users().await?;
//! export(&users, Path::new("users.csv"), ExportFormat::Csv)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The store and the web server require a Tokio runtime. The exporter is
//! plain blocking I/O and can be called from anywhere.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
mod storage;
mod web_server;

// Re-export public API
pub use config::{Command, Config, LogFormat, LogLevel, ServeOptions};
pub use error_handling::{ExportError, InitializationError, StorageError};
pub use export::{export, ExportFormat};
pub use run::{export_users, run_server};
pub use storage::{UserRecord, UserStore};
pub use web_server::{build_router, serve, AppState};

// Internal run module (wires configuration, store, exporter and server together)
mod run {
    use std::path::Path;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::export::{export, ExportFormat};
    use crate::storage::UserStore;
    use crate::web_server::{start_server, AppState};

    /// Initializes the store and serves HTTP until a shutdown signal arrives.
    ///
    /// The export directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized, the export
    /// directory cannot be created, or the listener cannot be bound.
    pub async fn run_server(config: Config) -> Result<()> {
        let opts = config
            .serve_options()
            .context("Invalid server options")?;

        let store = UserStore::from_config(&config);
        store
            .initialize()
            .await
            .context("Failed to initialize user store")?;

        tokio::fs::create_dir_all(&opts.export_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to create export directory: {}",
                    opts.export_dir.display()
                )
            })?;

        let state = AppState::new(store, opts.export_dir.clone());
        start_server(&opts, state).await
    }

    /// Exports every stored user to `output` and returns how many were written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the file cannot be
    /// written. A failed export leaves no partial file at `output`.
    pub async fn export_users(config: &Config, format: ExportFormat, output: &Path) -> Result<usize> {
        let store = UserStore::from_config(config);
        store
            .initialize()
            .await
            .context("Failed to initialize user store")?;

        let users = store.get_users().await.context("Failed to read users")?;
        let count = users.len();

        let target = output.to_path_buf();
        tokio::task::spawn_blocking(move || export(&users, &target, format))
            .await
            .context("Export task panicked")?
            .with_context(|| format!("Failed to export users to {}", output.display()))?;

        info!("Exported {} user(s) to {}", count, output.display());
        Ok(count)
    }
}
