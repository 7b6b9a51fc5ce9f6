use crate::utils::error::{IdeError, Result};
use crate::utils::validation::{validate_log_format, validate_log_level, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdeConfig {
    pub logging: Option<LoggingConfig>,
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    pub stats: Option<bool>,
}

impl IdeConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| IdeError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| IdeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LMC_LOG_LEVEL})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| IdeError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.format.as_deref())
    }

    pub fn session_stats(&self) -> Option<bool> {
        self.session.as_ref().and_then(|s| s.stats)
    }
}

impl Validate for IdeConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
        }
        if let Some(format) = self.log_format() {
            validate_log_format("logging.format", format)?;
        }
        Ok(())
    }
}
