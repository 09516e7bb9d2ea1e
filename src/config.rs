use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub profiles: ProfileSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Catalog file locations; unset paths use the bundled listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    pub grants_path: Option<PathBuf>,
    pub investors_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSettings {
    #[serde(default = "default_profile_capacity")]
    pub capacity: u64,
    #[serde(default = "default_profile_ttl")]
    pub ttl_secs: u64,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            capacity: default_profile_capacity(),
            ttl_secs: default_profile_ttl(),
        }
    }
}

fn default_profile_capacity() -> u64 { 10_000 }
fn default_profile_ttl() -> u64 { 86_400 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_top_n")]
    pub default_top_n: u8,
    #[serde(default = "default_max_top_n")]
    pub max_top_n: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            max_top_n: default_max_top_n(),
        }
    }
}

fn default_top_n() -> u8 { crate::core::DEFAULT_TOP_N as u8 }
fn default_max_top_n() -> u8 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Output shape of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line, human readable
    Pretty,
    /// Single-line text
    Compact,
}

impl LogFormat {
    /// Unknown names fall back to compact text
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

impl LoggingSettings {
    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.format)
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FOUNDER_MATCH)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FOUNDER_MATCH__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Top-N count for highlights, clamped to the configured maximum
    pub fn top_n(&self, requested: Option<u8>) -> usize {
        let n = requested.unwrap_or(self.matching.default_top_n);
        n.min(self.matching.max_top_n) as usize
    }
}

fn environment() -> Environment {
    Environment::with_prefix("FOUNDER_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
