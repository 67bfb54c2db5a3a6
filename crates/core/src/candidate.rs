//! Candidate sheet schema and the typed row draft.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::{CellType, CellValue, RawRow};
use crate::error::CoreError;

// ── Column headers ───────────────────────────────────────────────────

pub const HEADER_NAME: &str = "Name";
pub const HEADER_DESIGNATION: &str = "Designation";
pub const HEADER_COMPANY_NAME: &str = "Company Name";
pub const HEADER_EXPERIENCE: &str = "Experience(Years)";
pub const HEADER_CTC_CURRENCY: &str = "CTC currency";
pub const HEADER_CTC: &str = "CTC";
pub const HEADER_CTC_TYPE: &str = "CTC Type";
pub const HEADER_EMAIL_ID: &str = "Email ID";
pub const HEADER_CONTACT_NUMBER: &str = "Contact Number";
pub const HEADER_LINKEDIN: &str = "LinkedIn Link";
pub const HEADER_LOCATION: &str = "Location";

/// A column every row must fill, with the primitive type it must hold.
#[derive(Debug, Clone, Copy)]
pub struct RequiredField {
    pub header: &'static str,
    pub expected: CellType,
}

const fn required(header: &'static str, expected: CellType) -> RequiredField {
    RequiredField { header, expected }
}

/// The eleven required columns, in the order their errors are reported.
pub const REQUIRED_FIELDS: &[RequiredField] = &[
    required(HEADER_NAME, CellType::String),
    required(HEADER_DESIGNATION, CellType::String),
    required(HEADER_COMPANY_NAME, CellType::String),
    required(HEADER_EXPERIENCE, CellType::Number),
    required(HEADER_CTC_CURRENCY, CellType::String),
    required(HEADER_CTC, CellType::Number),
    required(HEADER_CTC_TYPE, CellType::String),
    required(HEADER_EMAIL_ID, CellType::String),
    required(HEADER_CONTACT_NUMBER, CellType::Number),
    required(HEADER_LINKEDIN, CellType::String),
    required(HEADER_LOCATION, CellType::String),
];

// ── CTC enums ────────────────────────────────────────────────────────

/// Currency a CTC figure is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CtcCurrency {
    Inr,
    Usd,
    Eur,
}

impl CtcCurrency {
    pub const ALL: [CtcCurrency; 3] = [Self::Inr, Self::Usd, Self::Eur];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    /// Units a CTC in this currency may be expressed in.
    pub fn allowed_units(&self) -> &'static [CtcUnit] {
        match self {
            Self::Inr => &[CtcUnit::Lakhs, CtcUnit::Crores],
            Self::Usd | Self::Eur => &[CtcUnit::Thousands, CtcUnit::Millions],
        }
    }
}

impl fmt::Display for CtcCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CtcCurrency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown CTC currency '{s}'")))
    }
}

/// Magnitude a CTC figure is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CtcUnit {
    Lakhs,
    Crores,
    Thousands,
    Millions,
}

impl CtcUnit {
    pub const ALL: [CtcUnit; 4] = [Self::Lakhs, Self::Crores, Self::Thousands, Self::Millions];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lakhs => "LAKHS",
            Self::Crores => "CRORES",
            Self::Thousands => "THOUSANDS",
            Self::Millions => "MILLIONS",
        }
    }
}

impl fmt::Display for CtcUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CtcUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown CTC type '{s}'")))
    }
}

// ── Draft ────────────────────────────────────────────────────────────

/// A fully typed candidate row.
///
/// Only built from rows that already passed validation; [`from_row`]
/// still checks every cell so a bad row yields an error rather than a
/// panic.
///
/// [`from_row`]: CandidateDraft::from_row
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateDraft {
    pub name: String,
    pub designation: String,
    pub company_name: String,
    pub experience_years: f64,
    pub ctc_currency: CtcCurrency,
    pub ctc_value: f64,
    pub ctc_unit: CtcUnit,
    pub email_id: String,
    /// Stored as text even though the sheet holds a number.
    pub contact_number: String,
    pub linked_in_link: String,
    pub location: String,
}

impl CandidateDraft {
    pub fn from_row(row: &RawRow) -> Result<Self, CoreError> {
        Ok(Self {
            name: text_cell(row, HEADER_NAME)?,
            designation: text_cell(row, HEADER_DESIGNATION)?,
            company_name: text_cell(row, HEADER_COMPANY_NAME)?,
            experience_years: number_cell(row, HEADER_EXPERIENCE)?,
            ctc_currency: text_cell(row, HEADER_CTC_CURRENCY)?.parse()?,
            ctc_value: number_cell(row, HEADER_CTC)?,
            ctc_unit: text_cell(row, HEADER_CTC_TYPE)?.parse()?,
            email_id: text_cell(row, HEADER_EMAIL_ID)?,
            contact_number: number_cell(row, HEADER_CONTACT_NUMBER)
                .map(|n| CellValue::Number(n).to_string())?,
            linked_in_link: text_cell(row, HEADER_LINKEDIN)?,
            location: text_cell(row, HEADER_LOCATION)?,
        })
    }
}

fn present_cell<'a>(row: &'a RawRow, header: &str) -> Result<&'a CellValue, CoreError> {
    let cell = row.get(header);
    if cell.is_present() {
        Ok(cell)
    } else {
        Err(CoreError::Validation(format!("{header} is not available")))
    }
}

fn text_cell(row: &RawRow, header: &str) -> Result<String, CoreError> {
    present_cell(row, header)?
        .as_text()
        .map(str::to_string)
        .ok_or_else(|| CoreError::Validation(format!("{header} must be a string")))
}

fn number_cell(row: &RawRow, header: &str) -> Result<f64, CoreError> {
    present_cell(row, header)?
        .as_number()
        .ok_or_else(|| CoreError::Validation(format!("{header} must be a number")))
}
