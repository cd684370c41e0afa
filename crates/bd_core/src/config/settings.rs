//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Discovery session settings.
    #[serde(default)]
    pub discovery: DiscoverySettings,

    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Discovery session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverySettings {
    /// Per-URI timeout handed to the discovery service.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    5
}

impl DiscoverySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Path configuration for saved logs and diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder where saved logs go. Empty means `/home/<user>/Downloads`.
    #[serde(default)]
    pub save_folder: String,

    /// Folder for diagnostic log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,

    /// Last URI submitted from the URI entry.
    #[serde(default)]
    pub last_uri: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            save_folder: String::new(),
            logs_folder: default_logs_folder(),
            last_uri: String::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Diagnostic log level (overridden by RUST_LOG).
    #[serde(default)]
    pub level: LogLevel,

    /// Keep the log view scrolled to the newest output.
    #[serde(default = "default_true")]
    pub autoscroll: bool,

    /// Also write diagnostics to a daily file in the logs folder.
    #[serde(default = "default_true")]
    pub file_logging: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            autoscroll: true,
            file_logging: true,
        }
    }
}

/// Configuration sections for atomic updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Discovery,
    Paths,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 3] = [
        ConfigSection::Discovery,
        ConfigSection::Paths,
        ConfigSection::Logging,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Discovery => "discovery",
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
        }
    }
}
