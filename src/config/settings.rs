//! Configuration settings for the console logger.

use serde::Deserialize;
use std::path::Path;

use crate::error::LoggerError;
use crate::level::Severity;

/// Cluster role value that disables the cluster tag.
pub const CLUSTER_DISABLED: i32 = -2;

/// Cluster role value of the primary/coordinator process.
pub const CLUSTER_MASTER: i32 = -1;

/// Settings file layout.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub logger: LoggerConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Construction record for a [`ConsoleLogger`](crate::logger::ConsoleLogger).
///
/// Captured once at construction and never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggerConfig {
    /// Minimum severity name, case-insensitive.
    #[serde(default = "default_level")]
    pub level: String,
    /// Process role: -1 for the coordinator, >= 0 for a worker index,
    /// anything below -1 disables the tag.
    #[serde(default = "default_cluster")]
    pub cluster: i32,
    /// Whether usage counters are kept.
    #[serde(default = "default_stat")]
    pub stat: bool,
    /// Append the local `GMT+HHMM` offset to timestamps.
    #[serde(default = "default_timezone")]
    pub timezone: bool,
    /// Route ERROR lines to stderr instead of stdout.
    #[serde(default = "default_split_streams")]
    pub split_streams: bool,
    /// Action parameter keys whose values are redacted (whole key,
    /// case-insensitive).
    #[serde(default = "default_redact_keys")]
    pub redact_keys: Vec<String>,
    /// Action parameter strings longer than this are truncated.
    #[serde(default = "default_max_param_len")]
    pub max_param_len: usize,
}

/// Diagnostics for the logger's own tracing output (used by `conlog`).
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    /// Tracing filter level (trace, debug, info, warn, error).
    #[serde(default = "default_diagnostics_level")]
    pub level: String,
    /// Output format ("pretty" or "json").
    #[serde(default = "default_diagnostics_format")]
    pub format: String,
}

// Default value functions
fn default_level() -> String {
    "ERROR".to_string()
}

fn default_cluster() -> i32 {
    CLUSTER_DISABLED
}

fn default_stat() -> bool {
    true
}

fn default_timezone() -> bool {
    true
}

fn default_split_streams() -> bool {
    true
}

fn default_redact_keys() -> Vec<String> {
    [
        "password",
        "secret",
        "token",
        "access_token",
        "api_key",
        "authorization",
        "credential",
    ]
    .iter()
    .map(|k| k.to_string())
    .collect()
}

fn default_max_param_len() -> usize {
    1024
}

fn default_diagnostics_level() -> String {
    "info".to_string()
}

fn default_diagnostics_format() -> String {
    "pretty".to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            cluster: default_cluster(),
            stat: default_stat(),
            timezone: default_timezone(),
            split_streams: default_split_streams(),
            redact_keys: default_redact_keys(),
            max_param_len: default_max_param_len(),
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            level: default_diagnostics_level(),
            format: default_diagnostics_format(),
        }
    }
}

impl LoggerConfig {
    /// Config with the given level and every other field defaulted.
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }

    /// Resolve the configured level name.
    pub fn severity(&self) -> Result<Severity, LoggerError> {
        self.level.parse()
    }
}

impl Settings {
    /// Load settings from a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoggerError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            LoggerError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate the settings.
    fn validate(&self) -> Result<(), LoggerError> {
        self.logger.severity()?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.diagnostics.level.to_lowercase().as_str()) {
            return Err(LoggerError::config(format!(
                "Invalid diagnostics level '{}'. Valid levels: {:?}",
                self.diagnostics.level, valid_levels
            )));
        }

        let valid_formats = ["pretty", "json"];
        if !valid_formats.contains(&self.diagnostics.format.to_lowercase().as_str()) {
            return Err(LoggerError::config(format!(
                "Invalid diagnostics format '{}'. Valid formats: {:?}",
                self.diagnostics.format, valid_formats
            )));
        }

        Ok(())
    }
}
