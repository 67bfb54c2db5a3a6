//! Duplicate detection on the identity columns (name, email id, contact
//! number), within the upload and against stored candidates.

use crate::candidate::{HEADER_CONTACT_NUMBER, HEADER_EMAIL_ID, HEADER_NAME};
use crate::cell::{CellValue, RawRow};
use crate::record::StoredIdentity;
use crate::store::CandidateLookup;

use super::report::{row_number, RowError};

/// Identity columns in the order their duplicate errors are reported.
pub const IDENTITY_HEADERS: [&str; 3] = [HEADER_NAME, HEADER_EMAIL_ID, HEADER_CONTACT_NUMBER];

// ── In-batch ─────────────────────────────────────────────────────────

/// Index of the first row in `batch` whose `header` cell equals `value`.
fn first_occurrence(batch: &[RawRow], header: &str, value: &CellValue) -> Option<usize> {
    batch.iter().position(|row| row.get(header) == value)
}

/// Flag the row at `index` for every identity column whose value first
/// appears on an earlier row.
///
/// Each later copy is reported against the *first* row holding the value,
/// never against its nearest neighbour, and the first row itself is never
/// flagged. Values are compared exactly as given. Cells that are not
/// present are skipped; the field check already reports them.
pub fn check_in_batch(batch: &[RawRow], index: usize, errors: &mut Vec<RowError>) {
    let row = &batch[index];
    let current = row_number(index);

    for header in IDENTITY_HEADERS {
        let value = row.get(header);
        if !value.is_present() {
            continue;
        }
        if let Some(first) = first_occurrence(batch, header, value) {
            if first != index {
                errors.push(RowError::new(
                    current,
                    format!(
                        "{header} {value} in row {current} also has duplicate in row {}",
                        row_number(first)
                    ),
                ));
            }
        }
    }
}

// ── Stored ───────────────────────────────────────────────────────────

/// Name and email as they would compare against stored text columns.
fn text_key(cell: &CellValue) -> Option<String> {
    cell.as_text().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Contact numbers are stored as text, so any present cell is rendered.
fn contact_key(cell: &CellValue) -> Option<String> {
    cell.is_present().then(|| cell.to_string())
}

/// Collect the identity values of every row into one lookup, so stored
/// duplicates for the whole upload are fetched in a single round trip.
pub fn lookup_for_batch(batch: &[RawRow]) -> CandidateLookup {
    let mut lookup = CandidateLookup::default();
    for row in batch {
        lookup.names.extend(text_key(row.get(HEADER_NAME)));
        lookup.email_ids.extend(text_key(row.get(HEADER_EMAIL_ID)));
        lookup
            .contact_numbers
            .extend(contact_key(row.get(HEADER_CONTACT_NUMBER)));
    }
    lookup
}

/// Flag each identity column of `row` that matches any stored candidate.
pub fn check_stored(
    row: &RawRow,
    row_number: usize,
    stored: &[StoredIdentity],
    errors: &mut Vec<RowError>,
) {
    let name = text_key(row.get(HEADER_NAME));
    let email = text_key(row.get(HEADER_EMAIL_ID));
    let contact = contact_key(row.get(HEADER_CONTACT_NUMBER));

    if name.is_some_and(|k| stored.iter().any(|s| s.name == k)) {
        errors.push(already_exists(HEADER_NAME, row.get(HEADER_NAME), row_number));
    }
    if email.is_some_and(|k| stored.iter().any(|s| s.email_id == k)) {
        errors.push(already_exists(HEADER_EMAIL_ID, row.get(HEADER_EMAIL_ID), row_number));
    }
    if contact.is_some_and(|k| stored.iter().any(|s| s.contact_number == k)) {
        errors.push(already_exists(
            HEADER_CONTACT_NUMBER,
            row.get(HEADER_CONTACT_NUMBER),
            row_number,
        ));
    }
}

fn already_exists(header: &str, value: &CellValue, row_number: usize) -> RowError {
    RowError::new(
        row_number,
        format!("{header} {value} in row {row_number} already exist"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::fixtures::valid_row;

    fn in_batch(batch: &[RawRow]) -> Vec<String> {
        let mut errors = Vec::new();
        for index in 0..batch.len() {
            check_in_batch(batch, index, &mut errors);
        }
        errors.into_iter().map(|e| e.message).collect()
    }

    fn identity(name: &str, email: &str, contact: &str) -> StoredIdentity {
        StoredIdentity {
            name: name.into(),
            email_id: email.into(),
            contact_number: contact.into(),
        }
    }

    // -- In-batch ------------------------------------------------------------

    #[test]
    fn later_copy_reports_first_occurrence() {
        let batch = vec![
            valid_row("A", "a@example.com", 1111111111.0),
            valid_row("A", "a2@example.com", 2222222222.0),
            valid_row("B", "b@example.com", 3333333333.0),
        ];
        let mut errors = Vec::new();
        check_in_batch(&batch, 0, &mut errors);
        assert!(errors.is_empty());
        check_in_batch(&batch, 2, &mut errors);
        assert!(errors.is_empty());
        check_in_batch(&batch, 1, &mut errors);
        assert_eq!(
            errors,
            vec![RowError::new(3, "Name A in row 3 also has duplicate in row 2")]
        );
    }

    #[test]
    fn every_copy_points_at_the_first_row() {
        let batch = vec![
            valid_row("A", "a@example.com", 1111111111.0),
            valid_row("B", "b@example.com", 2222222222.0),
            valid_row("A", "c@example.com", 3333333333.0),
            valid_row("A", "d@example.com", 4444444444.0),
        ];
        assert_eq!(
            in_batch(&batch),
            vec![
                "Name A in row 4 also has duplicate in row 2",
                "Name A in row 5 also has duplicate in row 2",
            ]
        );
    }

    #[test]
    fn each_identity_column_checked_independently() {
        let batch = vec![
            valid_row("A", "shared@example.com", 1111111111.0),
            valid_row("B", "b@example.com", 2222222222.0),
            valid_row("C", "shared@example.com", 2222222222.0),
        ];
        assert_eq!(
            in_batch(&batch),
            vec![
                "Email ID shared@example.com in row 4 also has duplicate in row 2",
                "Contact Number 2222222222 in row 4 also has duplicate in row 3",
            ]
        );
    }

    #[test]
    fn comparison_is_exact() {
        let batch = vec![
            valid_row("Asha", "asha@example.com", 1111111111.0),
            valid_row("asha", "ASHA@example.com", 2222222222.0),
        ];
        assert!(in_batch(&batch).is_empty());
    }

    // Unlike the legacy uploader, two missing names are not reported as
    // "Name undefined ... also has duplicate"; the field check covers them.
    #[test]
    fn missing_values_are_not_duplicates() {
        let mut first = valid_row("A", "a@example.com", 1111111111.0);
        let mut second = valid_row("B", "b@example.com", 2222222222.0);
        first.insert(HEADER_NAME, CellValue::Empty);
        second.insert(HEADER_NAME, CellValue::Empty);
        assert!(in_batch(&[first, second]).is_empty());
    }

    // -- Stored --------------------------------------------------------------

    #[test]
    fn lookup_collects_identity_values() {
        let batch = vec![
            valid_row("A", "a@example.com", 1111111111.0),
            valid_row("A", "b@example.com", 2222222222.0),
        ];
        let lookup = lookup_for_batch(&batch);
        assert_eq!(lookup.names.len(), 1);
        assert_eq!(lookup.email_ids.len(), 2);
        assert!(lookup.contact_numbers.contains("2222222222"));
    }

    #[test]
    fn lookup_skips_missing_values() {
        let mut row = valid_row("A", "a@example.com", 1111111111.0);
        row.insert(HEADER_EMAIL_ID, CellValue::Empty);
        row.insert(HEADER_CONTACT_NUMBER, CellValue::Number(0.0));
        let lookup = lookup_for_batch(&[row]);
        assert!(lookup.email_ids.is_empty());
        assert!(lookup.contact_numbers.is_empty());
        assert!(!lookup.is_empty());
    }

    #[test]
    fn stored_name_reported() {
        let stored = vec![identity("A", "other@example.com", "999")];
        let mut errors = Vec::new();
        check_stored(&valid_row("A", "a@example.com", 1111111111.0), 2, &stored, &mut errors);
        assert_eq!(errors, vec![RowError::new(2, "Name A in row 2 already exist")]);
    }

    #[test]
    fn every_matching_field_reported() {
        let stored = vec![
            identity("Z", "a@example.com", "0"),
            identity("Y", "y@example.com", "1111111111"),
        ];
        let mut errors = Vec::new();
        check_stored(&valid_row("A", "a@example.com", 1111111111.0), 5, &stored, &mut errors);
        let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
        assert_eq!(
            messages,
            vec![
                "Email ID a@example.com in row 5 already exist",
                "Contact Number 1111111111 in row 5 already exist",
            ]
        );
    }

    #[test]
    fn no_stored_match_no_error() {
        let stored = vec![identity("Z", "z@example.com", "123")];
        let mut errors = Vec::new();
        check_stored(&valid_row("A", "a@example.com", 1111111111.0), 2, &stored, &mut errors);
        assert!(errors.is_empty());
    }
}
