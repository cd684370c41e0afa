//! Configuration management for Basic Discoverer.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use bd_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new("settings.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Timeout: {}s", config.settings().discovery.timeout_seconds);
//!
//! // Remember the last URI and save just the paths section
//! config.settings_mut().paths.last_uri = "file:///tmp/a.mp3".to_string();
//! config.update_section(ConfigSection::Paths).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, DiscoverySettings, LoggingSettings, PathSettings, Settings};
