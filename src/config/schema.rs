//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Defaults mirror the original deployment so an empty config works.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Locations of the three record collections.
    pub storage: StorageConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Application secret. Carried for deployment parity; the data
    /// endpoints do not consume it.
    pub secret_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            storage: StorageConfig::default(),
            timeouts: TimeoutConfig::default(),
            secret_key: "ReplaceWithSecureKey".to_string(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
        }
    }
}

/// Paths of the spreadsheet files backing each collection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// The users collection. Also the destination of approval results.
    pub users_path: PathBuf,

    /// The news collection.
    pub news_path: PathBuf,

    /// The dashboard (check-in) collection.
    pub dashboard_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_path: PathBuf::from("./data.xlsx"),
            news_path: PathBuf::from("./berita.xlsx"),
            dashboard_path: PathBuf::from("./saved.xlsx"),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_deployment() {
        let config = AppConfig::default();
        assert_eq!(config.listener.bind_address, "127.0.0.1:5000");
        assert_eq!(config.storage.users_path, PathBuf::from("./data.xlsx"));
        assert_eq!(config.storage.news_path, PathBuf::from("./berita.xlsx"));
        assert_eq!(config.storage.dashboard_path, PathBuf::from("./saved.xlsx"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            dashboard_path = "/tmp/saved.xlsx"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.dashboard_path, PathBuf::from("/tmp/saved.xlsx"));
        assert_eq!(config.storage.users_path, PathBuf::from("./data.xlsx"));
        assert_eq!(config.listener.bind_address, "127.0.0.1:5000");
    }
}
