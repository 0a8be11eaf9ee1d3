/*!
 * Tests for application configuration
 */

use anyhow::Result;
use caption_seek::app_config::{Config, LogLevel, RetrievalConfig};
use crate::common;

#[test]
fn test_default_config_shouldValidate() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.retrieval.lang, None);
    assert_eq!(config.retrieval.watch_url, "https://www.youtube.com/watch");
    assert!(config.retrieval.user_agent.contains("Windows NT"));
    assert_eq!(config.log_level, LogLevel::Warn);
}

#[test]
fn test_validate_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();
    config.retrieval.lang = Some("klingon".to_string());
    assert!(config.validate().is_err());

    config.retrieval.lang = Some("pt-BR".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withBadRetrievalSettings_shouldFail() {
    let mut config = Config::default();
    config.retrieval.watch_url = "not a url".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.retrieval.user_agent = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.retrieval.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_retrievalConfig_withLang_shouldKeepOtherDefaults() {
    let config = RetrievalConfig::with_lang("es");
    assert_eq!(config.lang(), Some("es"));
    assert_eq!(config.timeout_secs, RetrievalConfig::default().timeout_secs);
}

#[test]
fn test_config_partialJson_shouldFillDefaults() -> Result<()> {
    let config: Config = serde_json::from_str(r#"{"retrieval":{"lang":"de"},"log_level":"debug"}"#)?;
    assert_eq!(config.retrieval.lang.as_deref(), Some("de"));
    assert_eq!(config.retrieval.timeout_secs, 30);
    assert_eq!(config.log_level, LogLevel::Debug);
    Ok(())
}

#[test]
fn test_config_saveAndLoad_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("caption-seek.json");

    let mut config = Config::default();
    config.retrieval.lang = Some("es".to_string());
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.retrieval, config.retrieval);
    Ok(())
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("fresh.json");
    assert!(!path.exists());

    let config = Config::load_or_create(&path)?;
    assert!(path.exists());
    assert_eq!(config.retrieval, RetrievalConfig::default());
    Ok(())
}

#[test]
fn test_fromFile_withMalformedJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;
    assert!(Config::from_file(&path).is_err());
    Ok(())
}
