//! Storage configuration loaded from environment variables.

use std::env;

use crate::database::DatabaseConfig;

/// Storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// `None` selects the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl StoreConfig {
    /// Load configuration from the environment, reading `.env` if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = var("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: var("DB_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DatabaseConfig::DEFAULT_MAX_CONNECTIONS),
                min_connections: var("DB_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DatabaseConfig::DEFAULT_MIN_CONNECTIONS),
            });

        Self { database }
    }
}
