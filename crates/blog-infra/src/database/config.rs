use std::time::Duration;

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub database: String,
    pub collection: String,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Configuration for `url` with default pool and naming settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: "blog".to_string(),
            collection: "posts".to_string(),
            max_pool_size: 100,
            min_pool_size: 10,
            connect_timeout: Duration::from_secs(10),
        }
    }
}
