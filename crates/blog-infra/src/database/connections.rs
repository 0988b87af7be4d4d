use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database, IndexModel};

use blog_core::error::RepoError;

use super::config::DatabaseConfig;
use super::entity::post::PostDocument;

/// Owned handle to the document store.
///
/// Opened once at startup and closed explicitly at shutdown; the driver
/// pools connections internally.
///
/// # Example
/// ```ignore
/// let store = DocumentStore::connect(&config).await?;
/// store.ensure_indexes().await?;
/// let repo = MongoPostRepository::new(&store);
/// // ...
/// store.close().await;
/// ```
pub struct DocumentStore {
    client: Client,
    db: Database,
    collection: String,
}

impl DocumentStore {
    /// Connect to the configured database and verify it answers a ping.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Connecting to document store...");

        let mut options = ClientOptions::parse(config.url.as_str())
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.max_pool_size = Some(config.max_pool_size);
        options.min_pool_size = Some(config.min_pool_size);
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client =
            Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;
        let db = client.database(&config.database);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Document store connected (pool: {})",
            config.max_pool_size
        );

        Ok(Self {
            client,
            db,
            collection: config.collection.clone(),
        })
    }

    /// The posts collection.
    pub fn posts(&self) -> Collection<PostDocument> {
        self.db.collection(&self.collection)
    }

    /// Create the ascending `created` index used by list ordering.
    pub async fn ensure_indexes(&self) -> Result<(), RepoError> {
        let index = IndexModel::builder().keys(doc! { "created": 1 }).build();

        self.posts()
            .create_index(index)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(collection = %self.collection, "Indexes ensured");
        Ok(())
    }

    /// Close the client, waiting for in-flight operations.
    pub async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("Document store closed");
    }
}
