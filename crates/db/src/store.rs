//! [`CandidateStore`] backed by PostgreSQL.

use async_trait::async_trait;
use talent_core::error::CoreError;
use talent_core::record::{NewCandidate, PersistedCandidate, StoredIdentity};
use talent_core::store::{CandidateLookup, CandidateStore};

use crate::repositories::CandidateRepo;
use crate::DbPool;

/// Store handle injected into the validator and persister.
#[derive(Clone)]
pub struct PgCandidateStore {
    pool: DbPool,
}

impl PgCandidateStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn storage_error(op: &'static str, err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, op, "Candidate store query failed");
    CoreError::Storage(format!("{op}: {err}"))
}

#[async_trait]
impl CandidateStore for PgCandidateStore {
    async fn find_matching_records(
        &self,
        lookup: &CandidateLookup,
    ) -> Result<Vec<StoredIdentity>, CoreError> {
        let names: Vec<String> = lookup.names.iter().cloned().collect();
        let email_ids: Vec<String> = lookup.email_ids.iter().cloned().collect();
        let phone_numbers: Vec<String> = lookup.contact_numbers.iter().cloned().collect();

        let rows = CandidateRepo::find_matching(&self.pool, &names, &email_ids, &phone_numbers)
            .await
            .map_err(|e| storage_error("find_matching_records", e))?;

        tracing::debug!(
            lookup_values = names.len() + email_ids.len() + phone_numbers.len(),
            matches = rows.len(),
            "Looked up stored candidates"
        );
        Ok(rows.into_iter().map(StoredIdentity::from).collect())
    }

    async fn bulk_insert(
        &self,
        candidates: &[NewCandidate],
    ) -> Result<Vec<PersistedCandidate>, CoreError> {
        let rows = CandidateRepo::bulk_create(&self.pool, candidates)
            .await
            .map_err(|e| storage_error("bulk_insert", e))?;

        tracing::info!(inserted = rows.len(), "Stored candidates");
        Ok(rows.into_iter().map(PersistedCandidate::from).collect())
    }
}
