//! PDF export functionality.
//!
//! Renders a single A4 page: the report title centered at the top, then one
//! line per user in input order. Text uses the built-in Courier font so every
//! glyph has the same advance, which lets the title be centered without font
//! metrics. There is no pagination; lines beyond the bottom margin fall off
//! the page.

use std::io::{BufWriter, Write};

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::config::PDF_REPORT_TITLE;
use crate::error_handling::ExportError;
use crate::storage::UserRecord;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const CELL_WIDTH_MM: f32 = 200.0;
const CELL_PADDING_MM: f32 = 1.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const FONT_SIZE_PT: f32 = 12.0;

/// Courier advance width is 600/1000 em.
const COURIER_ADVANCE_EM: f32 = 0.6;
const MM_PER_PT: f32 = 25.4 / 72.0;

/// A positioned line of text. `y_mm` is the baseline measured from the
/// bottom edge of the page, as PDF coordinates are.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PdfLine {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
}

fn text_width_mm(text: &str) -> f32 {
    text.chars().count() as f32 * FONT_SIZE_PT * COURIER_ADVANCE_EM * MM_PER_PT
}

/// Baseline (from the bottom edge) for text vertically centered in a cell
/// whose top edge is `top_mm` below the top of the page.
fn baseline_for_cell(top_mm: f32) -> f32 {
    let font_mm = FONT_SIZE_PT * MM_PER_PT;
    PAGE_HEIGHT_MM - (top_mm + LINE_HEIGHT_MM / 2.0 + 0.3 * font_mm)
}

pub(crate) fn format_record_line(record: &UserRecord) -> String {
    format!(
        "ID: {} Name: {} Email: {}",
        record.id, record.name, record.email
    )
}

/// Rejects text the built-in fonts cannot draw. They use WinAnsi encoding,
/// which covers Latin-1 only, and printpdf drops anything else silently.
pub(crate) fn check_encodable(text: &str) -> Result<(), ExportError> {
    match text.chars().find(|c| u32::from(*c) > 0xFF) {
        Some(c) => Err(ExportError::Pdf(format!(
            "character {:?} in {:?} cannot be drawn with the built-in PDF font",
            c, text
        ))),
        None => Ok(()),
    }
}

/// Computes where every line of the report goes.
pub(crate) fn layout(records: &[UserRecord]) -> Vec<PdfLine> {
    let mut lines = Vec::with_capacity(records.len() + 1);

    let title_x = MARGIN_MM + (CELL_WIDTH_MM - text_width_mm(PDF_REPORT_TITLE)) / 2.0;
    lines.push(PdfLine {
        text: PDF_REPORT_TITLE.to_string(),
        x_mm: title_x,
        y_mm: baseline_for_cell(MARGIN_MM),
    });

    // Title cell, then one blank line before the first record.
    let mut top = MARGIN_MM + 2.0 * LINE_HEIGHT_MM;
    for record in records {
        lines.push(PdfLine {
            text: format_record_line(record),
            x_mm: MARGIN_MM + CELL_PADDING_MM,
            y_mm: baseline_for_cell(top),
        });
        top += LINE_HEIGHT_MM;
    }

    lines
}

/// Writes `records` as a one-page PDF report to `out`.
///
/// # Errors
///
/// Returns `ExportError::Pdf` if a record contains characters outside
/// Latin-1; nothing is written to `out` in that case.
pub fn write_pdf<W: Write>(records: &[UserRecord], out: W) -> Result<(), ExportError> {
    let lines = layout(records);
    for line in &lines {
        check_encodable(&line.text)?;
    }

    let (doc, page, layer) = PdfDocument::new(
        PDF_REPORT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let current_layer = doc.get_page(page).get_layer(layer);

    for line in lines {
        current_layer.use_text(line.text, FONT_SIZE_PT, Mm(line.x_mm), Mm(line.y_mm), &font);
    }

    let mut writer = BufWriter::new(out);
    doc.save(&mut writer)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    writer.flush()?;

    Ok(())
}
