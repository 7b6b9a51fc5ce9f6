pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_log_format, validate_log_level, Validate};
use toml_config::IdeConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_LOG_FORMAT: &str = "compact";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lmc-ide")]
#[command(about = "Interactive menu for the Little Machine Code IDE")]
pub struct CliConfig {
    /// Path to an optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Log format: compact or json
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log a session summary on exit
    #[arg(long)]
    pub stats: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列參數與設定檔
    pub fn settings(&self) -> Result<IdeSettings> {
        let file = match &self.config {
            Some(path) => {
                crate::utils::validation::validate_path("config", path)?;
                let file = IdeConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let overrides = SettingsOverrides {
            verbose: self.verbose,
            log_format: self.log_format.clone(),
            stats: self.stats,
        };

        Ok(IdeSettings::resolve(file.as_ref(), &overrides))
    }
}

/// Values given on the command line; they win over the settings file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub verbose: bool,
    pub log_format: Option<String>,
    pub stats: bool,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeSettings {
    pub log_level: String,
    pub log_format: String,
    pub session_stats: bool,
}

impl Default for IdeSettings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            session_stats: false,
        }
    }
}

impl IdeSettings {
    pub fn resolve(file: Option<&IdeConfig>, overrides: &SettingsOverrides) -> Self {
        let defaults = Self::default();

        let log_level = if overrides.verbose {
            "debug".to_string()
        } else {
            file.and_then(IdeConfig::log_level)
                .map(str::to_string)
                .unwrap_or(defaults.log_level)
        };

        let log_format = overrides
            .log_format
            .clone()
            .or_else(|| file.and_then(IdeConfig::log_format).map(str::to_string))
            .unwrap_or(defaults.log_format);

        let session_stats = overrides.stats || file.and_then(IdeConfig::session_stats).unwrap_or(false);

        Self {
            log_level,
            log_format,
            session_stats,
        }
    }

    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

impl Validate for IdeSettings {
    fn validate(&self) -> Result<()> {
        validate_log_level("logging.level", &self.log_level)?;
        validate_log_format("logging.format", &self.log_format)?;
        Ok(())
    }
}
