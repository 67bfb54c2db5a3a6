//! Untyped spreadsheet cells and header-keyed rows.
//!
//! Cells arrive from the spreadsheet decoder with no static type. A
//! [`CellValue`] carries the runtime shape; [`RawRow`] maps header text to
//! cells for one data row.

use std::collections::HashMap;
use std::fmt;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A single spreadsheet cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Boolean(bool),
}

/// Runtime type of a non-empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    String,
    Number,
    Boolean,
}

impl CellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CellValue {
    /// Whether the cell counts as filled in.
    ///
    /// Presence follows truthiness: an empty cell, an empty string, numeric
    /// zero, `NaN` and `false` are all treated as "not available". A literal
    /// `0` experience or CTC is therefore reported as missing.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Boolean(b) => *b,
        }
    }

    /// Runtime type, or `None` for an empty cell.
    pub fn cell_type(&self) -> Option<CellType> {
        match self {
            Self::Empty => None,
            Self::Text(_) => Some(CellType::String),
            Self::Number(_) => Some(CellType::Number),
            Self::Boolean(_) => Some(CellType::Boolean),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Renders the cell the way it appears in messages and text columns.
///
/// Whole numbers print without a fractional part (`9876543210`, not
/// `9876543210.0`).
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// One data row of the uploaded sheet, keyed by header text.
///
/// Headers with no cell in this row are simply absent; [`RawRow::get`]
/// reports them as [`CellValue::Empty`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: CellValue) {
        self.cells.insert(header.into(), value);
    }

    /// Cell under `header`, or `Empty` when the column is missing.
    pub fn get(&self, header: &str) -> &CellValue {
        self.cells.get(header).unwrap_or(&EMPTY_CELL)
    }

    /// True when no cell in the row holds anything.
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|c| matches!(c, CellValue::Empty))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
