//! Business rules evaluated on a single row.

use crate::candidate::{
    CtcCurrency, CtcUnit, HEADER_CTC_CURRENCY, HEADER_CTC_TYPE, HEADER_EMAIL_ID,
};
use crate::cell::RawRow;

use super::report::RowError;

/// Append every business-rule violation for the row. Rules never
/// short-circuit each other.
pub fn check_business_rules(row: &RawRow, row_number: usize, errors: &mut Vec<RowError>) {
    check_email(row, row_number, errors);
    check_currency(row, row_number, errors);
    check_unit_pairing(row, row_number, errors);
}

/// Loose email shape: an `@`, then a later `.` with at least one
/// character between them.
///
/// Uses the first `@` and the last `.`.
pub fn is_valid_email(email: &str) -> bool {
    match (email.find('@'), email.rfind('.')) {
        (Some(at), Some(dot)) => dot >= at + 2,
        _ => false,
    }
}

// Non-text emails already carry a field error; there is nothing to inspect.
fn check_email(row: &RawRow, row_number: usize, errors: &mut Vec<RowError>) {
    if let Some(email) = row.get(HEADER_EMAIL_ID).as_text() {
        if !is_valid_email(email) {
            errors.push(RowError::new(
                row_number,
                format!("Invalid Email ID in Row {row_number}"),
            ));
        }
    }
}

fn check_currency(row: &RawRow, row_number: usize, errors: &mut Vec<RowError>) {
    let currency = row.get(HEADER_CTC_CURRENCY);
    let known = currency
        .as_text()
        .is_some_and(|c| c.parse::<CtcCurrency>().is_ok());
    if !currency.is_present() || !known {
        errors.push(RowError::new(
            row_number,
            format!("CTC currency can be any one of INR or USD or EUR in Row {row_number}"),
        ));
    }
}

fn check_unit_pairing(row: &RawRow, row_number: usize, errors: &mut Vec<RowError>) {
    let currency_cell = row.get(HEADER_CTC_CURRENCY);
    let unit = row
        .get(HEADER_CTC_TYPE)
        .as_text()
        .and_then(|u| u.parse::<CtcUnit>().ok());

    // An unrecognised currency takes no pairing rule; the currency error
    // above already covers it.
    if let Some(currency) = currency_cell
        .as_text()
        .and_then(|c| c.parse::<CtcCurrency>().ok())
    {
        if !unit.is_some_and(|u| currency.allowed_units().contains(&u)) {
            let message = match currency {
                CtcCurrency::Inr => {
                    format!("CTC Type can be LAKHS or CRORES when currency is INR in Row {row_number}")
                }
                CtcCurrency::Usd | CtcCurrency::Eur => format!(
                    "CTC Type can be THOUSANDS or MILLIONS when currency is {currency} in Row {row_number}"
                ),
            };
            errors.push(RowError::new(row_number, message));
        }
    }

    if !currency_cell.is_present() && unit.is_none() {
        errors.push(RowError::new(
            row_number,
            format!(
                "CTC Type can be LAKHS or CRORES when currency is INR for others it must be \
                 THOUSANDS or MILLIONS in Row {row_number}"
            ),
        ));
    }
}
