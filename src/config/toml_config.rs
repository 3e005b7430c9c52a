use crate::config::ClientConfig;
use crate::core::ConfigProvider;
use crate::utils::error::{DonorDriveError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// File based configuration:
///
/// ```toml
/// [client]
/// base_url = "https://www.extra-life.org/api"
/// timeout_seconds = 30
///
/// [client.headers]
/// X-Api-Key = "${DONORDRIVE_KEY}"
///
/// [defaults]
/// participant_id = 478153
/// team_id = 44013
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Identifiers used when the command line leaves them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    pub participant_id: Option<u64>,
    pub team_id: Option<u64>,
    pub team_group: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| DonorDriveError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| {
                    tracing::warn!("Environment variable {} is not set", var_name);
                    format!("${{{}}}", var_name)
                })
            })
            .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.client.validate()?;
        if let Some(group) = &self.defaults.team_group {
            crate::utils::validation::validate_non_empty_string("defaults.team_group", group)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.client.base_url()
    }

    fn timeout_seconds(&self) -> u64 {
        self.client.timeout_seconds()
    }

    fn api_version(&self) -> Option<&str> {
        self.client.api_version()
    }

    fn user_agent(&self) -> &str {
        self.client.user_agent()
    }

    fn headers(&self) -> Vec<(String, String)> {
        self.client.headers()
    }
}
