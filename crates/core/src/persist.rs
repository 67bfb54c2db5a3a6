//! Writing accepted uploads to storage.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::candidate::CandidateDraft;
use crate::cell::RawRow;
use crate::error::CoreError;
use crate::record::{NewCandidate, PersistedCandidate};
use crate::store::CandidateStore;

/// Which rows of an accepted upload get stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersistScope {
    /// Every row of the upload.
    #[default]
    AllRows,
    /// Only the first row; the behaviour of the legacy uploader.
    FirstRow,
}

impl PersistScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllRows => "all",
            Self::FirstRow => "first",
        }
    }
}

impl fmt::Display for PersistScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersistScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::AllRows),
            "first" => Ok(Self::FirstRow),
            other => Err(CoreError::Validation(format!(
                "Invalid persist scope '{other}'. Must be one of: all, first"
            ))),
        }
    }
}

/// Maps accepted rows to stored candidates and bulk-inserts them.
pub struct CandidatePersister {
    store: Arc<dyn CandidateStore>,
    created_by: String,
    scope: PersistScope,
}

impl CandidatePersister {
    pub fn new(
        store: Arc<dyn CandidateStore>,
        created_by: impl Into<String>,
        scope: PersistScope,
    ) -> Self {
        Self {
            store,
            created_by: created_by.into(),
            scope,
        }
    }

    /// Build insert DTOs for the rows covered by the configured scope.
    ///
    /// Rows are expected to have passed validation already, so a row that
    /// fails coercion here is an internal error.
    pub fn prepare(&self, batch: &[RawRow]) -> Result<Vec<NewCandidate>, CoreError> {
        let rows = match self.scope {
            PersistScope::AllRows => batch,
            PersistScope::FirstRow => &batch[..batch.len().min(1)],
        };
        rows.iter()
            .map(|row| {
                CandidateDraft::from_row(row)
                    .map(|draft| NewCandidate::from_draft(&draft, &self.created_by))
                    .map_err(|e| CoreError::Internal(format!("Accepted row failed coercion: {e}")))
            })
            .collect()
    }

    /// Store the accepted batch in one bulk insert.
    pub async fn persist(&self, batch: &[RawRow]) -> Result<Vec<PersistedCandidate>, CoreError> {
        let candidates = self.prepare(batch)?;
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        self.store.bulk_insert(&candidates).await
    }
}
