//! Storage seam for candidate ingestion.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::record::{NewCandidate, PersistedCandidate, StoredIdentity};

/// Identity values collected from an upload, used to find stored
/// candidates that collide with any row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateLookup {
    pub names: BTreeSet<String>,
    pub email_ids: BTreeSet<String>,
    pub contact_numbers: BTreeSet<String>,
}

impl CandidateLookup {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.email_ids.is_empty() && self.contact_numbers.is_empty()
    }
}

/// Read and write access to stored candidates.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Every stored candidate whose name, email id or contact number
    /// appears in `lookup`.
    async fn find_matching_records(
        &self,
        lookup: &CandidateLookup,
    ) -> Result<Vec<StoredIdentity>, CoreError>;

    /// Insert all candidates as one unit, returning the stored rows in
    /// input order.
    async fn bulk_insert(
        &self,
        candidates: &[NewCandidate],
    ) -> Result<Vec<PersistedCandidate>, CoreError>;
}
