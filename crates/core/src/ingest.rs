//! Validate-then-persist pipeline for one upload.

use std::sync::Arc;

use crate::cell::RawRow;
use crate::error::CoreError;
use crate::persist::{CandidatePersister, PersistScope};
use crate::record::PersistedCandidate;
use crate::store::CandidateStore;
use crate::validation::orchestrator::BatchValidator;
use crate::validation::report::RowError;

/// Result of ingesting one upload.
#[derive(Debug)]
pub enum IngestOutcome {
    /// Every row passed; these are the stored candidates.
    Accepted(Vec<PersistedCandidate>),
    /// At least one row failed; nothing was stored.
    Rejected(Vec<RowError>),
}

/// Validator and persister sharing one store.
pub struct CandidateIngestor {
    validator: BatchValidator,
    persister: CandidatePersister,
}

impl CandidateIngestor {
    pub fn new(
        store: Arc<dyn CandidateStore>,
        created_by: impl Into<String>,
        scope: PersistScope,
    ) -> Self {
        Self {
            validator: BatchValidator::new(Arc::clone(&store)),
            persister: CandidatePersister::new(store, created_by, scope),
        }
    }

    /// Validate the whole batch; persist it only if no row has an error.
    ///
    /// Acceptance is all-or-nothing: a rejected batch makes no writes.
    pub async fn ingest(&self, batch: &[RawRow]) -> Result<IngestOutcome, CoreError> {
        let report = self.validator.validate(batch).await?;
        if !report.is_accepted() {
            return Ok(IngestOutcome::Rejected(report.errors));
        }
        let stored = self.persister.persist(batch).await?;
        Ok(IngestOutcome::Accepted(stored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::fixtures::valid_row;
    use crate::store::memory::MemoryStore;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn accepted_batch_persists_once() {
        let store = Arc::new(MemoryStore::default());
        let ingestor = CandidateIngestor::new(store.clone(), "bulk-upload", PersistScope::AllRows);
        let batch = vec![
            valid_row("Asha", "asha@example.com", 9876543210.0),
            valid_row("Ravi", "ravi@example.com", 9876543211.0),
        ];

        let outcome = ingestor.ingest(&batch).await.unwrap();

        assert_matches!(outcome, IngestOutcome::Accepted(ref rows) if rows.len() == 2);
        assert_eq!(store.insert_calls(), 1);
    }

    #[tokio::test]
    async fn any_error_means_no_persistence() {
        let store = Arc::new(MemoryStore::default());
        let ingestor = CandidateIngestor::new(store.clone(), "bulk-upload", PersistScope::AllRows);
        let batch = vec![
            valid_row("Asha", "asha@example.com", 9876543210.0),
            valid_row("Ravi", "not-an-email", 9876543211.0),
        ];

        let outcome = ingestor.ingest(&batch).await.unwrap();

        assert_matches!(outcome, IngestOutcome::Rejected(ref errors) if errors.len() == 1);
        assert_eq!(store.insert_calls(), 0);
        assert!(store.stored().is_empty());
    }

    #[tokio::test]
    async fn second_upload_of_same_rows_is_rejected() {
        let store = Arc::new(MemoryStore::default());
        let ingestor = CandidateIngestor::new(store.clone(), "bulk-upload", PersistScope::AllRows);
        let batch = vec![valid_row("Asha", "asha@example.com", 9876543210.0)];

        assert_matches!(ingestor.ingest(&batch).await.unwrap(), IngestOutcome::Accepted(_));
        let outcome = ingestor.ingest(&batch).await.unwrap();

        let errors = match outcome {
            IngestOutcome::Rejected(errors) => errors,
            other => panic!("expected rejection, got {other:?}"),
        };
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Name Asha in row 2 already exist",
                "Email ID asha@example.com in row 2 already exist",
                "Contact Number 9876543210 in row 2 already exist",
            ]
        );
        assert_eq!(store.insert_calls(), 1);
    }
}
