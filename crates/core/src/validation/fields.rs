//! Presence and primitive-type checks for the required columns.

use crate::candidate::{RequiredField, REQUIRED_FIELDS};
use crate::cell::RawRow;

use super::report::RowError;

/// Append one error per required field that is missing or mistyped.
///
/// A field that is not present (see [`crate::cell::CellValue::is_present`])
/// gets a "not available" error and no type error.
pub fn check_required_fields(row: &RawRow, row_number: usize, errors: &mut Vec<RowError>) {
    for field in REQUIRED_FIELDS {
        if let Some(message) = field_error(row, field, row_number) {
            errors.push(RowError::new(row_number, message));
        }
    }
}

fn field_error(row: &RawRow, field: &RequiredField, row_number: usize) -> Option<String> {
    let cell = row.get(field.header);
    if !cell.is_present() {
        return Some(format!("{} not available in Row {row_number}", field.header));
    }
    if cell.cell_type() != Some(field.expected) {
        return Some(format!(
            "Type of {} must be {} in Row {row_number}",
            field.header, field.expected
        ));
    }
    None
}
