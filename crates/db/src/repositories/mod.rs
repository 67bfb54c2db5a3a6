//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod candidate_repo;

pub use candidate_repo::CandidateRepo;
