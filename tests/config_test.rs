use lmc_ide::config::SettingsOverrides;
use lmc_ide::utils::validation::Validate;
use lmc_ide::{IdeConfig, IdeError, IdeSettings};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_settings_from_file_with_overrides() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(
            br#"
[logging]
level = "info"
format = "json"

[session]
stats = false
"#,
        )
        .unwrap();

    let file = IdeConfig::from_file(temp_file.path()).unwrap();
    file.validate().unwrap();

    let overrides = SettingsOverrides {
        stats: true,
        ..Default::default()
    };
    let settings = IdeSettings::resolve(Some(&file), &overrides);

    assert_eq!(settings.log_level, "info");
    assert_eq!(settings.log_format, "json");
    assert!(settings.session_stats);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_bad_level_in_file_fails_validation() {
    let file = IdeConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
    let settings = IdeSettings::resolve(Some(&file), &SettingsOverrides::default());

    let err = settings.validate().unwrap_err();
    assert!(matches!(err, IdeError::InvalidConfigValueError { ref field, .. } if field == "logging.level"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_malformed_toml() {
    let result = IdeConfig::from_toml_str("[logging\nlevel = ");
    assert!(matches!(result, Err(IdeError::ConfigValidationError { .. })));
}
