//! Basic Discoverer - Main entry point
//!
//! This is the application entry point using iced. It handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - GStreamer initialization
//! - Application launch

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use bd_core::config::ConfigManager;
use bd_core::logging::{init_tracing, init_tracing_with_file};

mod app;
mod components;
mod handlers;
mod theme;
mod workers;

use app::{App, AppInit};

/// Directory under the user config dir holding our settings.
const APP_DIR: &str = "basic-discoverer";

/// Default config path: `<config_dir>/basic-discoverer/settings.toml`,
/// or `settings.toml` in the working directory when there is no config dir.
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join("settings.toml"))
        .unwrap_or_else(|| PathBuf::from("settings.toml"))
}

fn main() -> iced::Result {
    // Load configuration first (needed for the logging setup)
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);
    let config_error = config_manager.load_or_create().err();

    let logging = config_manager.settings().logging.clone();
    let _log_guard = if logging.file_logging {
        init_tracing_with_file(logging.level, &config_manager.logs_folder())
    } else {
        init_tracing(logging.level);
        None
    };

    if let Some(e) = config_error {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
    }

    tracing::info!("Basic Discoverer starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", bd_core::version());

    // Load the plugin registry before the UI starts, not on the first submit
    if let Err(e) = bd_bridge::init() {
        tracing::error!("Failed to initialize GStreamer: {}", e);
    }

    if let Err(e) = config_manager.ensure_dirs_exist() {
        tracing::error!("Failed to create directories: {}", e);
    }

    let init = AppInit {
        config: Arc::new(Mutex::new(config_manager)),
    };

    iced::application(move || App::new(&init), App::update, App::view)
        .title("Basic Discoverer")
        .window_size((1000.0, 1000.0))
        .subscription(App::subscription)
        .run()
}
