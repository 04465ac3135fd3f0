//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use quill_infra::database::{DatabaseConnections, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    /// Which store adapter is live; reported by the health endpoint.
    pub store_backend: &'static str,
}

impl AppState {
    /// Build the application state with the appropriate store adapter.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (posts, store_backend): (Arc<dyn PostRepository>, &'static str) = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => (
                        Arc::new(PostgresPostRepository::new(connections.main)),
                        "postgres",
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (Arc::new(InMemoryPostRepository::new()), "memory")
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Arc::new(InMemoryPostRepository::new()), "memory")
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (posts, store_backend): (Arc<dyn PostRepository>, &'static str) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            (Arc::new(InMemoryPostRepository::new()), "memory")
        };

        tracing::info!(store_backend, "Application state initialized");

        Self {
            posts,
            store_backend,
        }
    }
}
