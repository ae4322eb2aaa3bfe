//! Application state - shared across all handlers.

use std::sync::Arc;

use serde::Serialize;

use quill_core::ports::PostRepository;
use quill_infra::{DatabaseConfig, InMemoryPostRepository};

/// Which backend holds the posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Postgres,
    Memory,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub store: StoreKind,
}

impl AppState {
    pub fn with_repository(posts: Arc<dyn PostRepository>, store: StoreKind) -> Self {
        Self { posts, store }
    }

    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), StoreKind::Memory)
    }

    /// Build the application state, falling back to the in-memory store when
    /// the database is not configured or unreachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match quill_infra::database::connect(config).await {
                Ok(conn) => Self::with_repository(
                    Arc::new(quill_infra::SeaOrmPostRepository::new(conn)),
                    StoreKind::Postgres,
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory store");
            Self::in_memory()
        };

        tracing::info!(store = ?state.store, "Application state initialized");
        state
    }
}
