//! Decoding uploaded spreadsheets into header-keyed rows.
//!
//! Only the first worksheet is read. Row 1 holds the headers; every later
//! row with at least one filled cell becomes a [`RawRow`]. CSV uploads go
//! through the `csv` crate, everything else through calamine's format
//! auto-detection.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use csv::{ReaderBuilder, Trim};
use talent_core::cell::{CellValue, RawRow};

/// The uploaded bytes could not be read as a spreadsheet.
#[derive(Debug, thiserror::Error)]
pub enum SpreadsheetError {
    #[error("Unable to read spreadsheet: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Unable to read CSV file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet has no worksheets")]
    NoWorksheet,
}

/// Decode an uploaded file into data rows.
///
/// `file_name` and `content_type` only pick the decoder; the bytes are
/// never written to disk.
pub fn decode(
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<Vec<RawRow>, SpreadsheetError> {
    if is_csv(file_name, content_type) {
        decode_csv(bytes)
    } else {
        decode_workbook(bytes)
    }
}

fn is_csv(file_name: &str, content_type: Option<&str>) -> bool {
    let by_name = file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("csv"));
    let by_type = content_type.is_some_and(|ct| ct.starts_with("text/csv"));
    by_name || by_type
}

fn decode_workbook(bytes: &[u8]) -> Result<Vec<RawRow>, SpreadsheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SpreadsheetError::NoWorksheet)??;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| workbook_cell(cell).to_string().trim().to_string())
        .collect();

    Ok(rows
        .map(|row| build_row(&headers, row.iter().map(workbook_cell)))
        .filter(|row| !row.is_blank())
        .collect())
}

fn workbook_cell(cell: &Data) -> CellValue {
    match cell {
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        _ => CellValue::Empty,
    }
}

fn decode_csv(bytes: &[u8]) -> Result<Vec<RawRow>, SpreadsheetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = build_row(&headers, record.iter().map(csv_cell));
        if !row.is_blank() {
            rows.push(row);
        }
    }
    Ok(rows)
}

fn csv_cell(field: &str) -> CellValue {
    if field.is_empty() {
        return CellValue::Empty;
    }
    match field.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(field.to_string()),
    }
}

/// Pair cells with headers, dropping blank headers and empty cells.
fn build_row(headers: &[String], cells: impl Iterator<Item = CellValue>) -> RawRow {
    headers
        .iter()
        .zip(cells)
        .filter(|(header, cell)| !header.is_empty() && !matches!(cell, CellValue::Empty))
        .map(|(header, cell)| (header.clone(), cell))
        .collect()
}
