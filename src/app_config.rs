use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Translation cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// External translation backend
    #[serde(default)]
    pub backend: BackendConfig,

    /// Language detection settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Typing preview settings
    #[serde(default)]
    pub preview: PreviewConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// External backend type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    // @provider: offline only, no semantic translation tier
    #[default]
    None,
    // @provider: Ollama
    Ollama,
}

impl BackendProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::None => "None",
            Self::Ollama => "Ollama",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Ollama => "ollama".to_string(),
        }
    }
}

// Implement Display trait for BackendProvider
impl std::fmt::Display for BackendProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for BackendProvider
impl std::str::FromStr for BackendProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" | "offline" => Ok(Self::None),
            "ollama" => Ok(Self::Ollama),
            _ => Err(anyhow!("Invalid provider type: {}", s)),
        }
    }
}

/// Translation cache configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CacheConfig {
    /// Whether resolved results are memoized
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum number of entries before the oldest is evicted
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,

    /// Entry lifetime in seconds; `None` keeps entries until evicted
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: Option<u64>,
}

impl CacheConfig {
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_secs.map(Duration::from_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

/// External backend configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    // @field: Provider type identifier
    #[serde(default)]
    pub provider: BackendProvider,

    // @field: Model name
    #[serde(default = "default_ollama_model")]
    pub model: String,

    // @field: Service URL
    #[serde(default = "default_ollama_endpoint")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            provider: BackendProvider::default(),
            model: default_ollama_model(),
            endpoint: default_ollama_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Language detection configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DetectionConfig {
    /// Share of Latin letters above which a text counts as Latin-dominant
    #[serde(default = "default_latin_ratio_threshold")]
    pub latin_ratio_threshold: f32,

    /// The user's own language, used to bias detection of romanized input
    #[serde(default)]
    pub mother_tongue: Option<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            latin_ratio_threshold: default_latin_ratio_threshold(),
            mother_tongue: None,
        }
    }
}

/// Typing preview configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PreviewConfig {
    /// Quiet period after the last keystroke before resolving
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl PreviewConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { debounce_ms: default_debounce_ms() }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Longest accepted debounce window
pub const MAX_DEBOUNCE_MS: u64 = 2000;

fn default_true() -> bool {
    true
}

fn default_cache_capacity() -> usize {
    crate::translation::cache::DEFAULT_CAPACITY
}

fn default_cache_ttl_secs() -> Option<u64> {
    Some(crate::translation::cache::DEFAULT_TTL.as_secs())
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_latin_ratio_threshold() -> f32 {
    crate::detection::DEFAULT_LATIN_RATIO_THRESHOLD
}

fn default_debounce_ms() -> u64 {
    150
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .context(format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.cache.capacity == 0 {
            return Err(anyhow!("Cache capacity must be greater than 0"));
        }
        if self.cache.ttl_secs == Some(0) {
            return Err(anyhow!("Cache TTL must be greater than 0 when set"));
        }

        let threshold = self.detection.latin_ratio_threshold;
        if !(threshold > 0.5 && threshold <= 1.0) {
            return Err(anyhow!("Latin ratio threshold must be in (0.5, 1.0], got {}", threshold));
        }

        if let Some(mother_tongue) = &self.detection.mother_tongue {
            if !crate::language_utils::registry().normalize(mother_tongue).is_known() {
                return Err(anyhow!("Unknown mother tongue: {}", mother_tongue));
            }
        }

        if self.preview.debounce_ms == 0 || self.preview.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(anyhow!(
                "Preview debounce must be between 1 and {} ms, got {}",
                MAX_DEBOUNCE_MS,
                self.preview.debounce_ms
            ));
        }

        // Validate backend settings
        match self.backend.provider {
            BackendProvider::Ollama => {
                if self.backend.model.trim().is_empty() {
                    return Err(anyhow!("A model name is required for the Ollama backend"));
                }
                if self.backend.endpoint.trim().is_empty() {
                    return Err(anyhow!("An endpoint is required for the Ollama backend"));
                }
                if self.backend.timeout_secs == 0 {
                    return Err(anyhow!("Backend timeout must be greater than 0"));
                }
            }
            BackendProvider::None => {}
        }

        Ok(())
    }
}
