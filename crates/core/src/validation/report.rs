//! Row error and batch report types.

use std::fmt;

use serde::Serialize;

/// Offset from a zero-based data row index to the sheet row number the
/// user sees: one for 1-based counting, one for the header row.
pub const ROW_NUMBER_OFFSET: usize = 2;

/// Sheet row number for the data row at `index`.
pub fn row_number(index: usize) -> usize {
    index + ROW_NUMBER_OFFSET
}

/// A single validation failure on one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowError {
    pub row_number: usize,
    pub message: String,
}

impl RowError {
    pub fn new(row_number: usize, message: impl Into<String>) -> Self {
        Self {
            row_number,
            message: message.into(),
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating a whole upload.
///
/// Errors are kept in discovery order: row by row, and within a row in
/// check order.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub total_rows: usize,
    pub errors: Vec<RowError>,
}

impl ValidationReport {
    pub fn new(total_rows: usize, errors: Vec<RowError>) -> Self {
        Self { total_rows, errors }
    }

    /// A batch is accepted only when no row produced any error.
    pub fn is_accepted(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.message.clone()).collect()
    }

    /// Errors reported against one sheet row.
    pub fn errors_for_row(&self, row_number: usize) -> impl Iterator<Item = &RowError> {
        self.errors.iter().filter(move |e| e.row_number == row_number)
    }
}
