//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup. Unparseable numbers fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| lookup(key).and_then(|s| s.parse::<u64>().ok());

        let database = lookup("DATABASE_URL").map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(name) = lookup("DATABASE_NAME") {
                config.database = name;
            }
            if let Some(collection) = lookup("DB_COLLECTION") {
                config.collection = collection;
            }
            if let Some(max) = parsed("DB_MAX_POOL_SIZE").and_then(|n| u32::try_from(n).ok()) {
                config.max_pool_size = max;
            }
            if let Some(min) = parsed("DB_MIN_POOL_SIZE").and_then(|n| u32::try_from(n).ok()) {
                config.min_pool_size = min;
            }
            if let Some(secs) = parsed("DB_CONNECT_TIMEOUT_SECS") {
                config.connect_timeout = Duration::from_secs(secs);
            }
            config
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
        }
    }
}
