//! CSV export functionality.
//!
//! One header row (`ID,Name,Email`) followed by one row per user. Fields that
//! contain commas, quotes or line breaks are quoted by the `csv` writer.

use std::io::Write;

use csv::{Terminator, WriterBuilder};

use crate::error_handling::ExportError;
use crate::storage::UserRecord;

const CSV_HEADER: [&str; 3] = ["ID", "Name", "Email"];

fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}

/// Writes `records` as CSV to `out`.
pub fn write_csv<W: Write>(records: &[UserRecord], out: W) -> Result<(), ExportError> {
    let mut writer = WriterBuilder::new()
        .terminator(line_terminator())
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for record in records {
        let id = record.id.to_string();
        writer.write_record([id.as_str(), record.name.as_str(), record.email.as_str()])?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[UserRecord]) -> String {
        let mut buf = Vec::new();
        write_csv(records, &mut buf).expect("CSV export should succeed");
        String::from_utf8(buf).expect("CSV output should be UTF-8")
    }

    #[test]
    fn test_single_record() {
        let output = render(&[UserRecord::new(1, "Ann", "a@x.com")]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["ID,Name,Email", "1,Ann,a@x.com"]);
    }

    #[test]
    fn test_empty_input_is_header_only() {
        let output = render(&[]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["ID,Name,Email"]);
    }

    #[test]
    fn test_rows_follow_input_order() {
        let output = render(&[
            UserRecord::new(3, "Carol", "c@x.com"),
            UserRecord::new(7, "Dan", "d@x.com"),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "3,Carol,c@x.com");
        assert_eq!(lines[2], "7,Dan,d@x.com");
    }

    #[test]
    fn test_embedded_commas_and_quotes_are_escaped() {
        let output = render(&[UserRecord::new(1, "Doe, Jane", "say \"hi\"@x.com")]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "1,\"Doe, Jane\",\"say \"\"hi\"\"@x.com\"");

        // And the standard reader gets the original values back.
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let row = reader
            .records()
            .next()
            .expect("one data row")
            .expect("valid row");
        assert_eq!(&row[1], "Doe, Jane");
        assert_eq!(&row[2], "say \"hi\"@x.com");
    }

    #[test]
    fn test_empty_fields_are_emitted() {
        let output = render(&[UserRecord::new(2, "", "")]);
        assert_eq!(output.lines().nth(1), Some("2,,"));
    }

    #[test]
    fn test_uses_platform_line_ending() {
        let output = render(&[UserRecord::new(1, "Ann", "a@x.com")]);
        if cfg!(windows) {
            assert!(output.ends_with("\r\n"));
        } else {
            assert!(output.ends_with("1,Ann,a@x.com\n"));
            assert!(!output.contains('\r'));
        }
    }
}
