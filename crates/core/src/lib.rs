//! Domain logic for candidate spreadsheet ingestion.
//!
//! Everything here is free of HTTP and database concerns. Storage is reached
//! only through the [`store::CandidateStore`] trait, which the `talent-db`
//! crate implements for PostgreSQL.

pub mod candidate;
pub mod cell;
pub mod error;
pub mod ingest;
pub mod persist;
pub mod record;
pub mod store;
pub mod types;
pub mod validation;
