//! Export functionality for stored users.
//!
//! This module renders a list of users into one of three formats (CSV, JSON,
//! PDF) and writes the result to a file. Each writer is a pure function of its
//! input; none of them touch the database.

mod csv;
mod file;
mod json;
mod pdf;
mod types;

pub use self::csv::write_csv;
pub use file::{export, write_export};
pub use json::write_json;
pub use pdf::write_pdf;
pub use types::ExportFormat;
