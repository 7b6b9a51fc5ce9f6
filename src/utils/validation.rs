use crate::utils::error::{IdeError, Result};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(IdeError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    validate_one_of(field_name, level, &LOG_LEVELS)
}

pub fn validate_log_format(field_name: &str, format: &str) -> Result<()> {
    validate_one_of(field_name, format, &LOG_FORMATS)
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return Err(IdeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(IdeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
