//! I/O helpers for line tables and JSON reports.
//!
//! - `records_from_csv` / `records_to_csv`: in-memory CSV codec for
//!   `LineRecord` rows.
//! - `read_records_csv` / `write_records_csv`: the same, against a path.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The CSV dialect is deliberately minimal: comma-delimited, no quoting, a
//! fixed header. Filenames containing commas are not supported.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::record::LineRecord;

/// Fixed header row of the line tables.
pub const CSV_HEADER: &str = "angle,filename,length,p1_x,p1_y,p2_x,p2_y";

/// Renders records as CSV text with the fixed header.
pub fn records_to_csv(records: &[LineRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            r.angle, r.filename, r.length, r.p1_x, r.p1_y, r.p2_x, r.p2_y
        ));
    }
    out
}

/// Parses CSV text produced by `records_to_csv` (or the detection stage).
/// The header must match `CSV_HEADER` exactly; blank lines are skipped.
pub fn records_from_csv(text: &str) -> Result<Vec<LineRecord>, String> {
    let mut lines = text.lines();
    match lines.next() {
        Some(header) if header.trim() == CSV_HEADER => {}
        Some(header) => return Err(format!("Unexpected CSV header: {header}")),
        None => return Err("Empty CSV input".to_string()),
    }

    let mut records = Vec::new();
    for (lineno, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 7 {
            return Err(format!(
                "Line {}: expected 7 fields, got {}",
                lineno + 2,
                fields.len()
            ));
        }
        let num = |idx: usize| -> Result<f32, String> {
            fields[idx]
                .trim()
                .parse::<f32>()
                .map_err(|e| format!("Line {}: bad number {:?}: {e}", lineno + 2, fields[idx]))
        };
        records.push(LineRecord {
            angle: num(0)?,
            filename: fields[1].trim().to_string(),
            length: num(2)?,
            p1_x: num(3)?,
            p1_y: num(4)?,
            p2_x: num(5)?,
            p2_y: num(6)?,
        });
    }
    Ok(records)
}

/// Reads a line table from disk.
pub fn read_records_csv(path: &Path) -> Result<Vec<LineRecord>, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    records_from_csv(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Writes a line table to disk, creating parent directories.
pub fn write_records_csv(path: &Path, records: &[LineRecord]) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, records_to_csv(records))
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
