use std::{net::SocketAddr, path::Path};

use derivative::Derivative;
use serde::Deserialize;

use crate::error::ErrorVerbosity;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[source] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub socket_address: SocketAddr,
    pub error_verbosity: ErrorVerbosity,
    pub database: DatabaseConfig,
    /// Base URL used to build `Location` headers, e.g. `https://library.example.com`.
    ///
    /// Falls back to the `Host` header of the request.
    #[serde(default)]
    pub public_base_url: Option<String>,
    /// Protects the non-anonymous routes with an API key when present.
    #[serde(default)]
    pub api_key: Option<ApiKeyConfig>,
}

impl ServerConfig {
    pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(ConfigError::Read)?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::Parse)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// e.g. `sqlite://library.db` or `sqlite::memory:`
    pub connection_string: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(connection_string: impl Into<String>, max_connections: u32) -> Self {
        Self {
            connection_string: connection_string.into(),
            max_connections,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.connection_string.contains(":memory:")
            || self.connection_string.contains("mode=memory")
    }
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Derivative, Clone, Deserialize)]
#[derivative(Debug)]
pub struct ApiKeyConfig {
    #[serde(default = "default_api_key_header_name")]
    pub header_name: String,
    #[derivative(Debug(format_with = "crate::utils::mask_fmt"))]
    pub api_keys: Vec<String>,
}

impl ApiKeyConfig {
    pub fn new(header_name: impl Into<String>, api_keys: Vec<String>) -> Self {
        Self {
            header_name: header_name.into(),
            api_keys,
        }
    }
}

fn default_api_key_header_name() -> String {
    String::from("Authorization")
}
