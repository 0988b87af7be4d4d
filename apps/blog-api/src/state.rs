//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::RepoError;
use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "mongodb")]
use blog_infra::{DocumentStore, MongoPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "mongodb")]
    store: Option<Arc<DocumentStore>>,
}

impl AppState {
    /// State backed by an explicit repository, with no store to close.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "mongodb")]
            store: None,
        }
    }

    /// Build the application state with appropriate implementations.
    ///
    /// Without a database configuration the in-memory repository is used.
    /// A configured database that cannot be reached is an error; writes are
    /// never silently redirected to a non-durable store.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, RepoError> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::with_repository(Arc::new(InMemoryPostRepository::new())));
        };

        let state = Self::connect(config).await?;
        tracing::info!("Application state initialized");
        Ok(state)
    }

    #[cfg(feature = "mongodb")]
    async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        let store = DocumentStore::connect(config).await?;
        store.ensure_indexes().await?;

        let posts = Arc::new(MongoPostRepository::new(&store));
        Ok(Self {
            posts,
            store: Some(Arc::new(store)),
        })
    }

    #[cfg(not(feature = "mongodb"))]
    async fn connect(_config: &DatabaseConfig) -> Result<Self, RepoError> {
        Err(RepoError::Connection(
            "DATABASE_URL is set but the server was built without the mongodb feature".to_string(),
        ))
    }

    /// Release the document store, if one is open.
    pub async fn shutdown(&self) {
        #[cfg(feature = "mongodb")]
        if let Some(store) = &self.store {
            store.close().await;
        }

        tracing::info!("Application state shut down");
    }
}
