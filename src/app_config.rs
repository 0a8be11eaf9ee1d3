use anyhow::{Context, Result, anyhow};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles loading, validating and saving the JSON configuration
/// file used by the command-line front end.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Caption retrieval settings
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Per-request retrieval settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RetrievalConfig {
    // @field: Preferred caption language (ISO tag); None picks the default track
    #[serde(default)]
    pub lang: Option<String>,

    // @field: Identification string sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // @field: Watch-page URL prefix the id is appended to
    #[serde(default = "default_watch_url")]
    pub watch_url: String,

    // @field: HTTP client timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl RetrievalConfig {
    /// Settings with a language preference and defaults for everything else
    pub fn with_lang(lang: impl Into<String>) -> Self {
        Self {
            lang: Some(lang.into()),
            ..Self::default()
        }
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            lang: None,
            user_agent: default_user_agent(),
            watch_url: default_watch_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for log::LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// Desktop browser string; mobile agents get a page without the embedded manifest
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

fn default_watch_url() -> String {
    "https://www.youtube.com/watch".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if let Some(lang) = self.retrieval.lang() {
            crate::language_utils::validate_language_tag(lang)
                .context("Invalid caption language preference")?;
        }

        url::Url::parse(&self.retrieval.watch_url)
            .map_err(|e| anyhow!("Invalid watch URL '{}': {}", self.retrieval.watch_url, e))?;

        if self.retrieval.user_agent.trim().is_empty() {
            return Err(anyhow!("User agent must not be empty"));
        }

        if self.retrieval.timeout_secs == 0 {
            return Err(anyhow!("Timeout must be at least one second"));
        }

        Ok(())
    }

    /// Load the configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Load the configuration, writing a default file first if none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }
}
