//! API configuration

use serde::Deserialize;

/// Which record store backs the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local store, lost on restart
    #[default]
    Memory,
    /// PostgreSQL via `infra_db`
    Postgres,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Record store backend
    pub store_backend: StoreBackend,
    /// Database URL, used by the postgres backend
    pub database_url: String,
    /// Pool size for the postgres backend
    pub max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            store_backend: StoreBackend::Memory,
            database_url: "postgres://localhost/claims_ledger".to_string(),
            max_connections: 5,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables, falling back
    /// to defaults for anything unset
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_memory_store() {
        let config = ApiConfig::default();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: ApiConfig = config::Config::builder()
            .set_override("port", 9000)
            .and_then(|b| b.set_override("store_backend", "postgres"))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .expect("config should deserialize");

        assert_eq!(config.port, 9000);
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.max_connections, 5);
    }
}
