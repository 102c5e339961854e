#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, ViewError};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
pub use toml_config::{ContextConfig, TomlConfig};

pub const DEFAULT_BASE_URL: &str = "http://localhost:9081";
pub const BASE_URL_ENV: &str = "APPCTL_BASE_URL";
pub const TOKEN_ENV: &str = "APPCTL_TOKEN";

/// Read-only connection settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            timeout_seconds: None,
        }
    }
}

impl ClientConfig {
    /// Loads the config file, selects the context, then applies
    /// `APPCTL_BASE_URL` / `APPCTL_TOKEN` and validates the result.
    ///
    /// An explicit `path` must exist. Without one, a missing default file
    /// falls back to `DEFAULT_BASE_URL` unless a context was requested.
    pub fn load(path: Option<&Path>, context: Option<&str>) -> Result<Self> {
        let from_file = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ViewError::ConfigError {
                        message: format!("config file {} not found", path.display()),
                    });
                }
                Self::from_file(path, context)?
            }
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::from_file(&path, context)?
                } else if let Some(name) = context {
                    return Err(ViewError::ConfigError {
                        message: format!(
                            "context '{}' requested but there is no config file at {}",
                            name,
                            path.display()
                        ),
                    });
                } else {
                    tracing::debug!("No config at {}, using defaults", path.display());
                    Self::default()
                }
            }
        };

        let config = from_file
            .with_overrides(std::env::var(BASE_URL_ENV).ok(), std::env::var(TOKEN_ENV).ok())
            .normalized();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path, context: Option<&str>) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.display());
        TomlConfig::from_file(path)?.client_config(context)
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".appctl")
            .join("config.toml")
    }

    pub fn with_overrides(mut self, base_url: Option<String>, auth_token: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(auth_token) = auth_token {
            self.auth_token = Some(auth_token);
        }
        self
    }

    /// Strips trailing slashes so paths can be appended directly.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl ConfigProvider for ClientConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(token) = &self.auth_token {
            validate_non_empty_string("auth_token", token)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
