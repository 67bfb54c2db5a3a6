//! Repository for the `candidate_summary` table.

use sqlx::types::Json;
use sqlx::PgPool;
use talent_core::record::NewCandidate;
use talent_core::types::DbId;

use crate::models::candidate::{CandidateIdentityRow, CandidateRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "candidate_id, name, email_id, phone_number, candidates_data, \
    created_date, created_by, modified_date, modified_by";

/// Provides insert and lookup operations for candidates.
pub struct CandidateRepo;

impl CandidateRepo {
    /// Identity columns of every candidate whose name, email id or phone
    /// number appears in the corresponding slice.
    pub async fn find_matching(
        pool: &PgPool,
        names: &[String],
        email_ids: &[String],
        phone_numbers: &[String],
    ) -> Result<Vec<CandidateIdentityRow>, sqlx::Error> {
        sqlx::query_as::<_, CandidateIdentityRow>(
            "SELECT name, email_id, phone_number FROM candidate_summary \
             WHERE name = ANY($1) OR email_id = ANY($2) OR phone_number = ANY($3) \
             ORDER BY candidate_id",
        )
        .bind(names)
        .bind(email_ids)
        .bind(phone_numbers)
        .fetch_all(pool)
        .await
    }

    /// Insert candidates within a single transaction, returning the created
    /// rows in input order. Either every row is stored or none is.
    pub async fn bulk_create(
        pool: &PgPool,
        candidates: &[NewCandidate],
    ) -> Result<Vec<CandidateRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut results = Vec::with_capacity(candidates.len());

        let query = format!(
            "INSERT INTO candidate_summary \
                (name, email_id, phone_number, candidates_data, created_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );

        for candidate in candidates {
            let row = sqlx::query_as::<_, CandidateRow>(&query)
                .bind(&candidate.name)
                .bind(&candidate.email_id)
                .bind(&candidate.contact_number)
                .bind(Json(&candidate.candidates_data))
                .bind(&candidate.created_by)
                .fetch_one(&mut *tx)
                .await?;
            results.push(row);
        }

        tx.commit().await?;
        Ok(results)
    }

    /// Find a single candidate by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CandidateRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM candidate_summary WHERE candidate_id = $1");
        sqlx::query_as::<_, CandidateRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored candidates.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM candidate_summary")
            .fetch_one(pool)
            .await
    }
}
