//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{CommentRepository, PostRepository, TokenService};
use blog_infra::{InMemoryCommentRepository, InMemoryPostRepository, JwtTokenService};

#[cfg(feature = "postgres")]
use blog_infra::database;
#[cfg(feature = "postgres")]
use blog_infra::{PostgresCommentRepository, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub login_url: String,
    /// Which store backs the repositories, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// State backed by the in-memory repositories.
    pub fn in_memory(tokens: Arc<dyn TokenService>, login_url: impl Into<String>) -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            tokens,
            login_url: login_url.into(),
            storage: "memory",
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
        let state = Self::in_memory(tokens, config.login_url.clone());

        #[cfg(feature = "postgres")]
        let state = match &config.database {
            Some(db_config) => match database::connect(db_config).await {
                Ok(conn) => {
                    let conn = Arc::new(conn);
                    Self {
                        posts: Arc::new(PostgresPostRepository::new(Arc::clone(&conn))),
                        comments: Arc::new(PostgresCommentRepository::new(conn)),
                        storage: "postgres",
                        ..state
                    }
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    state
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                state
            }
        };

        #[cfg(not(feature = "postgres"))]
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without postgres feature");
        }

        tracing::info!(storage = state.storage, "Application state initialized");

        state
    }
}
