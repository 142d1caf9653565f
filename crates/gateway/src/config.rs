//! Top-level configuration, composed from the shared sections.

use common::{ConfigError, DatabaseConfig, JwtConfig, ServerConfig};

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

impl Config {
    /// Load every section from the environment.
    ///
    /// # Errors
    /// Fails when the JWT secret is missing in release builds or too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env()?,
        })
    }
}
