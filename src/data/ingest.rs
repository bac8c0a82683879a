//! CSV ingest and normalization.
//!
//! Turns a two-column CSV (`x`, `y` headers, any extra columns ignored)
//! into a clean sample set.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Deterministic behavior** (no hidden randomness)

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::Sample;
use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: samples plus row-level diagnostics.
#[derive(Debug, Clone)]
pub struct IngestedSamples {
    pub samples: Vec<Sample>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load samples from a CSV file with `x` and `y` columns.
pub fn load_samples_csv(path: &Path) -> Result<IngestedSamples, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_samples(file)
}

/// Read samples from any CSV source (file, byte slice in tests).
pub fn read_samples<R: Read>(reader: R) -> Result<IngestedSamples, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    let x_idx = *header_map
        .get("x")
        .ok_or_else(|| AppError::new(2, "Missing required column: `x`"))?;
    let y_idx = *header_map
        .get("y")
        .ok_or_else(|| AppError::new(2, "Missing required column: `y`"))?;

    let mut samples = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, x_idx, y_idx) {
            Ok(sample) => samples.push(sample),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    if samples.is_empty() {
        return Err(AppError::new(3, "No valid rows remain after validation."));
    }

    Ok(IngestedSamples {
        samples,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿x"). If we don't strip it, schema validation will
    // incorrectly report a missing column.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_row(record: &StringRecord, x_idx: usize, y_idx: usize) -> Result<Sample, String> {
    let x = parse_value(record, x_idx, "x")?;
    let y = parse_value(record, y_idx, "y")?;
    Ok(Sample::new(x, y))
}

fn parse_value(record: &StringRecord, idx: usize, name: &str) -> Result<f64, String> {
    let raw = record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing `{name}` value."))?;
    let v = raw
        .parse::<f64>()
        .map_err(|_| format!("Invalid `{name}` value '{raw}'."))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("Non-finite `{name}` value '{raw}'."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_simple_csv() {
        let csv = "x,y\n1,2\n3,4.5\n";
        let out = read_samples(csv.as_bytes()).unwrap();
        assert_eq!(out.rows_read, 2);
        assert!(out.row_errors.is_empty());
        assert_eq!(out.samples, vec![Sample::new(1.0, 2.0), Sample::new(3.0, 4.5)]);
    }

    #[test]
    fn skips_bad_rows_with_line_numbers() {
        let csv = "x,y\n1,2\nnope,4\n5,6\n";
        let out = read_samples(csv.as_bytes()).unwrap();
        assert_eq!(out.samples.len(), 2);
        assert_eq!(out.row_errors.len(), 1);
        assert_eq!(out.row_errors[0].line, 3);
    }

    #[test]
    fn tolerates_bom_and_header_case() {
        let csv = "\u{feff}X,Y\n1,2\n";
        let out = read_samples(csv.as_bytes()).unwrap();
        assert_eq!(out.samples.len(), 1);
    }

    #[test]
    fn errors_when_no_valid_rows() {
        let csv = "x,y\nbad,row\n";
        let err = read_samples(csv.as_bytes()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn errors_on_missing_column() {
        let csv = "x,value\n1,2\n";
        let err = read_samples(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("`y`"));
    }
}
