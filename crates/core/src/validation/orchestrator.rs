//! Batch-level validation.

use std::sync::Arc;

use crate::cell::RawRow;
use crate::error::CoreError;
use crate::store::CandidateStore;

use super::duplicates::{check_in_batch, check_stored, lookup_for_batch};
use super::fields::check_required_fields;
use super::report::{row_number, ValidationReport};
use super::rules::check_business_rules;

/// Runs every row check over an upload and decides accept or reject.
pub struct BatchValidator {
    store: Arc<dyn CandidateStore>,
}

impl BatchValidator {
    pub fn new(store: Arc<dyn CandidateStore>) -> Self {
        Self { store }
    }

    /// Validate all rows of `batch`.
    ///
    /// For each row, in order: required fields, business rules, in-batch
    /// duplicates, stored duplicates. Every error from every row is kept.
    /// Stored candidates colliding with any row are fetched up front in a
    /// single lookup; a store failure aborts validation with an error
    /// rather than a report.
    pub async fn validate(&self, batch: &[RawRow]) -> Result<ValidationReport, CoreError> {
        let lookup = lookup_for_batch(batch);
        let stored = if lookup.is_empty() {
            Vec::new()
        } else {
            self.store.find_matching_records(&lookup).await?
        };

        let mut errors = Vec::new();
        for (index, row) in batch.iter().enumerate() {
            let row_number = row_number(index);
            check_required_fields(row, row_number, &mut errors);
            check_business_rules(row, row_number, &mut errors);
            check_in_batch(batch, index, &mut errors);
            check_stored(row, row_number, &stored, &mut errors);
        }

        Ok(ValidationReport::new(batch.len(), errors))
    }
}
