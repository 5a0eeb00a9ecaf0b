/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use wordcue::app_config::{Config, EmptyEntryPolicy, LogLevel};

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.splitting.empty_entries, EmptyEntryPolicy::Skip);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test loading a configuration file from disk
#[test]
fn test_from_file_withPartialConfig_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", r#"{"log_level": "warn"}"#)?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.splitting.empty_entries, EmptyEntryPolicy::Skip);

    Ok(())
}

/// Invalid JSON is reported with the file name
#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let err = Config::from_file(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("conf.json"));

    Ok(())
}

/// Unknown enum values are rejected
#[test]
fn test_from_file_withUnknownPolicy_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"splitting": {"empty_entries": "merge"}}"#,
    )?;

    assert!(Config::from_file(&path).is_err());

    Ok(())
}

/// A missing default config falls back to defaults
#[test]
fn test_load_or_default_withMissingFile_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load_or_default(temp_dir.path().join("absent.json"))?;
    assert_eq!(config, Config::default());
    Ok(())
}

/// Configuration survives a serialize/deserialize cycle
#[test]
fn test_serialize_shouldUseLowercaseNames() -> Result<()> {
    let mut config = Config::default();
    config.splitting.empty_entries = EmptyEntryPolicy::Fail;

    let json = serde_json::to_string(&config)?;
    assert!(json.contains("\"fail\""));
    assert!(json.contains("\"info\""));

    Ok(())
}
