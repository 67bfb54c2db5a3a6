//! Stored candidate shapes.
//!
//! A stored candidate keeps its identity columns (`name`, `email_id`,
//! `phone_number`) flat and everything else in a JSON document:
//!
//! ```text
//! { ctc: { value, ctcUnit, ctcCurrency }, candidateExperience,
//!   company: { name }, location: { city }, linkedIn }
//! ```

use serde::{Deserialize, Serialize};

use crate::candidate::{CandidateDraft, CtcCurrency, CtcUnit};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtcDocument {
    pub value: f64,
    pub ctc_unit: CtcUnit,
    pub ctc_currency: CtcCurrency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDocument {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDocument {
    pub city: String,
}

/// The nested JSON payload stored alongside each candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDocument {
    pub ctc: CtcDocument,
    pub candidate_experience: f64,
    pub company: CompanyDocument,
    pub location: LocationDocument,
    pub linked_in: String,
}

impl From<&CandidateDraft> for CandidateDocument {
    fn from(draft: &CandidateDraft) -> Self {
        Self {
            ctc: CtcDocument {
                value: draft.ctc_value,
                ctc_unit: draft.ctc_unit,
                ctc_currency: draft.ctc_currency,
            },
            candidate_experience: draft.experience_years,
            company: CompanyDocument {
                name: draft.company_name.clone(),
            },
            location: LocationDocument {
                city: draft.location.clone(),
            },
            linked_in: draft.linked_in_link.clone(),
        }
    }
}

/// DTO for inserting a new candidate. The store assigns the id and
/// creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
    pub name: String,
    pub email_id: String,
    pub contact_number: String,
    pub candidates_data: CandidateDocument,
    pub created_by: String,
}

impl NewCandidate {
    pub fn from_draft(draft: &CandidateDraft, created_by: &str) -> Self {
        Self {
            name: draft.name.clone(),
            email_id: draft.email_id.clone(),
            contact_number: draft.contact_number.clone(),
            candidates_data: CandidateDocument::from(draft),
            created_by: created_by.to_string(),
        }
    }
}

/// A candidate as committed to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCandidate {
    pub candidate_id: DbId,
    pub name: String,
    pub email_id: String,
    pub contact_number: String,
    pub candidates_data: CandidateDocument,
    pub created_date: Timestamp,
    pub created_by: String,
    pub modified_date: Option<Timestamp>,
    pub modified_by: Option<String>,
}

/// Identity columns of a stored candidate, as returned by duplicate lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredIdentity {
    pub name: String,
    pub email_id: String,
    pub contact_number: String,
}
