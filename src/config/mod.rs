#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::{Defaults, TomlConfig};

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Extra Life's DonorDrive instance.
pub const DEFAULT_BASE_URL: &str = "https://www.extra-life.org/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("donordrive/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Sent as the `version` query parameter when set.
    pub api_version: Option<String>,
    pub user_agent: String,
    /// Attached to every request.
    pub headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            api_version: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers: Vec<(String, String)> = self
            .headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        headers.sort();
        headers
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("client.base_url", &self.base_url)?;
        validation::validate_range("client.timeout_seconds", self.timeout_seconds, 1, 300)?;
        validation::validate_non_empty_string("client.user_agent", &self.user_agent)?;
        if let Some(version) = &self.api_version {
            validation::validate_non_empty_string("client.api_version", version)?;
        }
        for (name, value) in &self.headers {
            validation::validate_non_empty_string("client.headers", name)?;
            validation::validate_non_empty_string(&format!("client.headers.{}", name), value)?;
        }
        Ok(())
    }
}
