//! CSV report writer
//!
//! Header `item,category`, one row per record. An item containing a comma or
//! a double quote is quoted, with inner quotes doubled. Categories are never
//! quoted.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, WasteSortError};
use crate::record::Record;

pub const HEADER: &str = "item,category";

/// Default file for interactive saves
pub const DEFAULT_REPORT_FILE: &str = "waste_report.csv";

/// Write `records` as CSV to `path`, replacing any existing file
pub fn write_report(records: &[Record], path: &Path) -> Result<()> {
    let write_err = |source| WasteSortError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_csv(records, &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    tracing::debug!(path = %path.display(), rows = records.len(), "report written");
    Ok(())
}

/// Write `records` as CSV to any sink
pub fn write_csv<W: Write>(records: &[Record], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for record in records {
        writeln!(out, "{},{}", escape_field(record.item()), record.category())?;
    }
    Ok(())
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('"') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
