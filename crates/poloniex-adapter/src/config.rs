/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed transport settings and optional credential pair
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::http::{ClientConfig, PoloniexError, Result};

/// Top-level configuration for a Poloniex client
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdapterConfig {
    /// Transport settings; defaults apply to omitted fields
    #[serde(default)]
    pub client: ClientConfig,
    /// API key (trading requires both key and secret)
    #[serde(default)]
    pub api_key: Option<String>,
    /// API secret
    #[serde(default)]
    pub api_secret: Option<String>,
}

impl AdapterConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|err| PoloniexError::Config(format!("read {}: {err}", path.display())))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|err| PoloniexError::Config(err.to_string()))
    }
}
