//! Candidate models.
//!
//! Maps to the `candidate_summary` table. The JSONB `candidates_data`
//! column holds the nested [`CandidateDocument`].

use sqlx::types::Json;
use sqlx::FromRow;
use talent_core::record::{CandidateDocument, PersistedCandidate, StoredIdentity};
use talent_core::types::{DbId, Timestamp};

/// A row from the `candidate_summary` table.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub candidate_id: DbId,
    pub name: String,
    pub email_id: String,
    pub phone_number: String,
    pub candidates_data: Json<CandidateDocument>,
    pub created_date: Timestamp,
    pub created_by: String,
    pub modified_date: Option<Timestamp>,
    pub modified_by: Option<String>,
}

impl From<CandidateRow> for PersistedCandidate {
    fn from(row: CandidateRow) -> Self {
        Self {
            candidate_id: row.candidate_id,
            name: row.name,
            email_id: row.email_id,
            contact_number: row.phone_number,
            candidates_data: row.candidates_data.0,
            created_date: row.created_date,
            created_by: row.created_by,
            modified_date: row.modified_date,
            modified_by: row.modified_by,
        }
    }
}

/// The identity columns only, as fetched by duplicate lookups.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateIdentityRow {
    pub name: String,
    pub email_id: String,
    pub phone_number: String,
}

impl From<CandidateIdentityRow> for StoredIdentity {
    fn from(row: CandidateIdentityRow) -> Self {
        Self {
            name: row.name,
            email_id: row.email_id,
            contact_number: row.phone_number,
        }
    }
}
