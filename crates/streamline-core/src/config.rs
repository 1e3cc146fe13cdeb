//! Configuration file and credential resolution
//!
//! The only persisted settings are the API key and an optional base URL, kept
//! in `~/.config/streamline/config.toml`. Keys can also come from the command
//! line or the environment; `resolve_api_key` applies the precedence.

use crate::client::DEFAULT_BASE_URL;
use crate::errors::StreamlineError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const API_KEY_ENV: &str = "STREAMLINE_API_KEY";
pub const API_URL_ENV: &str = "STREAMLINE_API_URL";

const DEFAULT_CONFIG: &str = r#"# Streamline CLI Configuration
# Get your API key from: https://www.streamlinehq.com/profile?tab=api_keys

[auth]
apiKey = ""
"#;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamlineConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Where a credential may come from, highest precedence first.
#[derive(Debug, Clone, Default)]
pub struct CredentialSources {
    /// `--api-key` given on the subcommand.
    pub command: Option<String>,
    /// `--api-key` given before the subcommand.
    pub global: Option<String>,
    pub environment: Option<String>,
    pub config_file: Option<String>,
}

impl CredentialSources {
    /// First non-blank key in precedence order.
    pub fn resolve_api_key(&self) -> Option<String> {
        [
            &self.command,
            &self.global,
            &self.environment,
            &self.config_file,
        ]
        .into_iter()
        .filter_map(|source| non_blank(source.as_deref()))
        .next()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl StreamlineConfig {
    pub fn api_key(&self) -> Option<String> {
        non_blank(self.auth.api_key.as_deref())
    }

    pub fn base_url(&self) -> Option<String> {
        non_blank(self.api.base_url.as_deref())
    }

    pub fn from_str(content: &str) -> Result<Self, StreamlineError> {
        Ok(toml::from_str(content)?)
    }

    /// Read a config file. A missing file yields the empty configuration.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StreamlineError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).await.map_err(|e| {
            StreamlineError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content).map_err(|e| {
            StreamlineError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Like `from_file`, but an unreadable file only produces a warning so
    /// that other credential sources still apply.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(path).await {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Could not read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Base URL from, in order: the given environment value, the config file,
    /// the built-in default.
    pub fn effective_base_url(&self, environment: Option<&str>) -> String {
        non_blank(environment)
            .or_else(|| self.base_url())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

/// `~/.config/streamline/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("streamline")
        .join("config.toml")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

/// Write a starter config unless one already exists.
pub async fn create_default_config(path: &Path) -> Result<InitOutcome, StreamlineError> {
    if path.exists() {
        return Ok(InitOutcome::AlreadyExists);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, DEFAULT_CONFIG).await?;
    log::info!("Created default config at {}", path.display());
    Ok(InitOutcome::Created)
}
