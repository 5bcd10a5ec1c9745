use serde::Deserialize;
use std::env;

pub mod database;

pub use database::DatabaseConfig;

use crate::core::Result;

/// Engine configuration loaded from the environment
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub log_level: String,
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            database: DatabaseConfig::from_env()?,
        })
    }
}
