use std::sync::Arc;

use talent_core::ingest::CandidateIngestor;
use talent_db::PgCandidateStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: talent_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Validate-then-persist pipeline for uploads.
    pub ingestor: Arc<CandidateIngestor>,
}

impl AppState {
    /// Wire the PostgreSQL candidate store into a fresh ingestor.
    pub fn new(pool: talent_db::DbPool, config: ServerConfig) -> Self {
        let store = Arc::new(PgCandidateStore::new(pool.clone()));
        let ingestor = CandidateIngestor::new(
            store,
            config.upload_created_by.clone(),
            config.persist_scope,
        );
        Self {
            pool,
            config: Arc::new(config),
            ingestor: Arc::new(ingestor),
        }
    }
}
