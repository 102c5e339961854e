use crate::config::ClientConfig;
use crate::utils::error::{Result, ViewError};
use crate::utils::validation::validate_required_field;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// On-disk client configuration: named contexts, one of them current.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub current_context: Option<String>,
    #[serde(default)]
    pub contexts: HashMap<String, ContextConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    pub endpoint: String,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ViewError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ViewError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${APPCTL_TOKEN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Picks `name`, or the current context when `name` is `None`.
    pub fn context(&self, name: Option<&str>) -> Result<&ContextConfig> {
        let name = match name {
            Some(name) => name,
            None => validate_required_field("current_context", &self.current_context)?.as_str(),
        };

        self.contexts
            .get(name)
            .ok_or_else(|| ViewError::InvalidConfigValueError {
                field: "current_context".to_string(),
                value: name.to_string(),
                reason: "No context with that name in the config file".to_string(),
            })
    }

    /// Not validated here: environment overrides are applied first by
    /// `ClientConfig::load`.
    pub fn client_config(&self, name: Option<&str>) -> Result<ClientConfig> {
        let context = self.context(name)?;
        Ok(ClientConfig {
            base_url: context.endpoint.clone(),
            auth_token: context.token.clone(),
            timeout_seconds: context.timeout_seconds,
        }
        .normalized())
    }
}
