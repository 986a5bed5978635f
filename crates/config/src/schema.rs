//! Config schema types (server, upstream directory services, persistence).

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotdeckConfig {
    pub server: ServerConfig,
    pub directory: DirectoryConfig,
    pub persistence: PersistenceConfig,
}

/// Admin gateway server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to. Defaults to "127.0.0.1".
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 3827,
        }
    }
}

/// Upstream directory services (collections, assistants, answer categories).
///
/// All three listings are served by the platform API, so a single base URL
/// covers them. `timeout_secs` bounds each individual fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Base URL of the platform API, e.g. "http://127.0.0.1:8080".
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".into(),
            timeout_secs: 15,
        }
    }
}

/// Persistence endpoint that accepts submitted channel configurations.
///
/// Defaults to the directory base URL when left empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Base URL of the submission endpoint. Empty means "same as directory".
    pub base_url: String,
}

impl BotdeckConfig {
    /// Resolve the effective persistence base URL.
    #[must_use]
    pub fn persistence_base_url(&self) -> &str {
        if self.persistence.base_url.is_empty() {
            &self.directory.base_url
        } else {
            &self.persistence.base_url
        }
    }
}
