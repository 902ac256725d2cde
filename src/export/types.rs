//! Export types.

use std::str::FromStr;

use clap::ValueEnum;
use strum_macros::{Display, EnumIter};

use crate::config::EXPORT_FILE_STEM;
use crate::error_handling::ExportError;

/// Export format options.
///
/// Parsing is exact and case-sensitive: only `csv`, `json` and `pdf` are
/// accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values with an `ID,Name,Email` header
    Csv,
    /// A single JSON array of user objects
    Json,
    /// A one-page PDF report
    Pdf,
}

impl ExportFormat {
    /// File extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// MIME type sent with downloads of this format.
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Download file name, e.g. `users.csv`.
    pub fn file_name(self) -> String {
        format!("{}.{}", EXPORT_FILE_STEM, self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}
