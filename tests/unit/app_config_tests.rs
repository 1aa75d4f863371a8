/*!
 * Tests for application configuration
 */

use anyhow::Result;
use lipi::app_config::{BackendProvider, Config, LogLevel};

use crate::common;

#[test]
fn test_config_save_and_from_file_shouldPreserveValues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.backend.provider = BackendProvider::Ollama;
    config.backend.model = "qwen2.5:7b".to_string();
    config.detection.mother_tongue = Some("telugu".to_string());
    config.cache.ttl_secs = None;
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.backend.provider, BackendProvider::Ollama);
    assert_eq!(loaded.backend.model, "qwen2.5:7b");
    assert_eq!(loaded.detection.mother_tongue.as_deref(), Some("telugu"));
    assert_eq!(loaded.cache.ttl_secs, None);
    assert_eq!(loaded.log_level, LogLevel::Debug);
    loaded.validate()?;
    Ok(())
}

#[test]
fn test_config_from_file_withEmptyObject_shouldUseDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, "{}")?;

    let config = Config::from_file(&path)?;
    assert!(config.cache.enabled);
    assert_eq!(config.cache.capacity, 500);
    assert_eq!(config.backend.provider, BackendProvider::None);
    assert_eq!(config.preview.debounce_ms, 150);
    assert!((config.detection.latin_ratio_threshold - 0.75).abs() < f32::EPSILON);
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

#[test]
fn test_config_from_file_withMissingFile_shouldFail() {
    let result = Config::from_file("/definitely/not/here/conf.json");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to open config file"));
}

#[test]
fn test_config_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, "{ not json")?;

    let result = Config::from_file(&path);
    assert!(result.unwrap_err().to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_config_validate_withUnknownMotherTongue_shouldFail() {
    let mut config = Config::default();
    config.detection.mother_tongue = Some("elvish".to_string());
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validate_withZeroTtl_shouldFail() {
    let mut config = Config::default();
    config.cache.ttl_secs = Some(0);
    assert!(config.validate().is_err());
}

#[test]
fn test_log_level_shouldMapToLevelFilter() {
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
