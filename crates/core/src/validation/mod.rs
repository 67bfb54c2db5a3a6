//! Row validation engine.
//!
//! Field presence/type checks, business rules, in-batch and stored
//! duplicate detection, and the orchestrator that runs them over a whole
//! upload. Only the orchestrator touches storage, and only through
//! [`crate::store::CandidateStore`].

pub mod duplicates;
pub mod fields;
pub mod orchestrator;
pub mod report;
pub mod rules;
