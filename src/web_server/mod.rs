//! HTTP front end.
//!
//! Provides three routes:
//! - `GET /` - HTML list of stored users with an "add user" form
//! - `POST /add` - stores a user from form fields `name` and `email`
//! - `GET /export/{format}` - downloads all users as csv, json or pdf
//!
//! Handlers only compose the store and the exporter; they hold no state of
//! their own beyond [`AppState`].

mod error;
mod handlers;
mod types;

use std::future::Future;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServeOptions;
use handlers::{add_user_handler, export_handler, index_handler};
pub use types::AppState;

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/add", post(add_user_handler))
        .route("/export/{format}", get(export_handler))
        .with_state(state)
}

/// Serves the application on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| anyhow::anyhow!("Failed to read listener address: {}", e))?;
    log::info!("Web server listening on http://{}/", addr);
    log::info!("  - Export: http://{}/export/{{csv,json,pdf}}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Web server error: {}", e))?;

    log::info!("Web server stopped");
    Ok(())
}

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn start_server(opts: &ServeOptions, state: AppState) -> Result<(), anyhow::Error> {
    let addr = format!("{}:{}", opts.host, opts.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind web server to {}: {}", addr, e))?;

    serve(listener, state, crate::app::shutdown_signal()).await
}
