//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Args, FromArgMatches, Parser, Subcommand, ValueEnum};

use crate::config::constants::{DB_PATH, DEFAULT_HOST, DEFAULT_PORT, EXPORT_DIR};
use crate::export::ExportFormat;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Top-level configuration.
///
/// Holds the options shared by every subcommand. The database location is
/// injected here rather than hardcoded so tests can point it at a temporary
/// directory.
///
/// # Examples
///
/// ```no_run
/// use user_export::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/tmp/users.db"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user_export",
    version,
    about = "Store user records in SQLite and export them as CSV, JSON or PDF",
    long_about = None
)]
pub struct Config {
    /// Database path (SQLite file)
    #[arg(long, env = "USER_EXPORT_DB_PATH", default_value = DB_PATH, global = true)]
    pub db_path: PathBuf,

    /// Log level
    #[arg(
        long,
        value_enum,
        env = "USER_EXPORT_LOG_LEVEL",
        default_value_t = LogLevel::Info,
        global = true
    )]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Subcommand to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the web interface
    Serve(ServeOptions),

    /// Export every stored user to a file and exit
    Export {
        /// Output format
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Output file path
        #[arg(long)]
        output: PathBuf,
    },
}

/// Options for the HTTP server.
#[derive(Debug, Clone, Args)]
pub struct ServeOptions {
    /// Address to bind
    #[arg(long, env = "USER_EXPORT_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "USER_EXPORT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory where per-request export files are written before download
    #[arg(long, env = "USER_EXPORT_DIR", default_value = EXPORT_DIR)]
    pub export_dir: PathBuf,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            export_dir: PathBuf::from(EXPORT_DIR),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            command: None,
        }
    }
}

impl Config {
    /// Returns the server options.
    ///
    /// When `serve` was not named on the command line the options are resolved
    /// the same way clap would for `serve` with no flags, so `USER_EXPORT_HOST`,
    /// `USER_EXPORT_PORT` and `USER_EXPORT_DIR` still apply.
    ///
    /// # Errors
    ///
    /// Returns a `clap::Error` if one of those environment variables holds an
    /// invalid value.
    pub fn serve_options(&self) -> Result<ServeOptions, clap::Error> {
        match &self.command {
            Some(Command::Serve(opts)) => Ok(opts.clone()),
            _ => {
                let matches = ServeOptions::augment_args(clap::Command::new("serve"))
                    .try_get_matches_from(["serve"])?;
                ServeOptions::from_arg_matches(&matches)
            }
        }
    }
}
