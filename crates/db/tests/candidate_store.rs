//! Integration tests for the candidate repository and the PostgreSQL
//! `CandidateStore`.

use sqlx::PgPool;
use talent_core::candidate::{CtcCurrency, CtcUnit};
use talent_core::record::{
    CandidateDocument, CompanyDocument, CtcDocument, LocationDocument, NewCandidate,
};
use talent_core::store::{CandidateLookup, CandidateStore};
use talent_db::repositories::CandidateRepo;
use talent_db::PgCandidateStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_candidate(name: &str, email: &str, phone: &str) -> NewCandidate {
    NewCandidate {
        name: name.to_string(),
        email_id: email.to_string(),
        contact_number: phone.to_string(),
        candidates_data: CandidateDocument {
            ctc: CtcDocument {
                value: 24.0,
                ctc_unit: CtcUnit::Lakhs,
                ctc_currency: CtcCurrency::Inr,
            },
            candidate_experience: 6.5,
            company: CompanyDocument {
                name: "Acme Corp".to_string(),
            },
            location: LocationDocument {
                city: "Pune".to_string(),
            },
            linked_in: "https://linkedin.com/in/someone".to_string(),
        },
        created_by: "integration-test".to_string(),
    }
}

fn lookup(names: &[&str], emails: &[&str], phones: &[&str]) -> CandidateLookup {
    CandidateLookup {
        names: names.iter().map(|s| s.to_string()).collect(),
        email_ids: emails.iter().map(|s| s.to_string()).collect(),
        contact_numbers: phones.iter().map(|s| s.to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_check(pool: PgPool) {
    talent_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bulk_create_assigns_ids_and_keeps_document(pool: PgPool) {
    let created = CandidateRepo::bulk_create(
        &pool,
        &[
            new_candidate("Asha", "asha@example.com", "9876543210"),
            new_candidate("Ravi", "ravi@example.com", "9876543211"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(created.len(), 2);
    assert!(created[1].candidate_id > created[0].candidate_id);
    assert_eq!(created[0].created_by, "integration-test");
    assert!(created[0].modified_date.is_none());

    let fetched = CandidateRepo::find_by_id(&pool, created[0].candidate_id)
        .await
        .unwrap()
        .expect("candidate should exist");
    assert_eq!(fetched.name, "Asha");
    assert_eq!(fetched.phone_number, "9876543210");
    assert_eq!(
        fetched.candidates_data.0,
        new_candidate("Asha", "asha@example.com", "9876543210").candidates_data
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_document_stored_with_nested_keys(pool: PgPool) {
    CandidateRepo::bulk_create(&pool, &[new_candidate("Asha", "asha@example.com", "1")])
        .await
        .unwrap();

    let (unit, city): (String, String) = sqlx::query_as(
        "SELECT candidates_data->'ctc'->>'ctcUnit', candidates_data->'location'->>'city' \
         FROM candidate_summary",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(unit, "LAKHS");
    assert_eq!(city, "Pune");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_matching_is_or_across_columns(pool: PgPool) {
    CandidateRepo::bulk_create(
        &pool,
        &[
            new_candidate("Asha", "asha@example.com", "1111"),
            new_candidate("Ravi", "ravi@example.com", "2222"),
            new_candidate("Meera", "meera@example.com", "3333"),
        ],
    )
    .await
    .unwrap();

    let store = PgCandidateStore::new(pool);
    let matches = store
        .find_matching_records(&lookup(&["Asha"], &["ravi@example.com"], &["9999"]))
        .await
        .unwrap();

    let names: Vec<_> = matches.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Asha", "Ravi"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_matching_with_no_hits(pool: PgPool) {
    CandidateRepo::bulk_create(&pool, &[new_candidate("Asha", "asha@example.com", "1111")])
        .await
        .unwrap();

    let store = PgCandidateStore::new(pool);
    let matches = store
        .find_matching_records(&lookup(&["asha"], &[], &["111"]))
        .await
        .unwrap();
    assert!(matches.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_store_bulk_insert_returns_domain_records(pool: PgPool) {
    let store = PgCandidateStore::new(pool.clone());
    let created = store
        .bulk_insert(&[new_candidate("Asha", "asha@example.com", "9876543210")])
        .await
        .unwrap();

    assert_eq!(created.len(), 1);
    assert_eq!(created[0].contact_number, "9876543210");
    assert_eq!(created[0].candidates_data.ctc.ctc_currency, CtcCurrency::Inr);
    assert_eq!(CandidateRepo::count(&pool).await.unwrap(), 1);
}
