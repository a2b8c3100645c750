use sqlx::SqlitePool;

use crate::config::{Config, ScoreMode};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Connections are checked out per query or transaction and returned on drop.
    pub db: SqlitePool,
    pub config: Config,
}

impl AppState {
    pub fn score_mode(&self) -> ScoreMode {
        self.config.score_mode
    }
}
