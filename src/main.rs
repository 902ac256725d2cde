//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `user_export` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use user_export::initialization::init_logger_with;
use user_export::{export_users, run_server, Command, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let result = match config.command.clone() {
        Some(Command::Export { format, output }) => export_users(&config, format, &output)
            .await
            .map(|count| {
                println!(
                    "Exported {} user{} to {}",
                    count,
                    if count == 1 { "" } else { "s" },
                    output.display()
                );
            }),
        Some(Command::Serve(_)) | None => run_server(config).await,
    };

    if let Err(e) = result {
        eprintln!("user_export error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
