//! Configuration management
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `shell.toml` in the config directory (native builds only)
//! 3. `DAB_*` environment variables (`DAB_SCROLL__TOP=smooth`, ...)

use anyhow::Result;
use serde::Deserialize;

use crate::navigation::ScrollSettings;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Level for the browser console logger.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// `EnvFilter` directive for native tools (RUST_LOG still wins).
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub scroll: ScrollSettings,

    /// Role the mock session starts with (`guest`, `customer`,
    /// `store-owner`, `admin`).
    #[serde(default = "default_mock_role")]
    pub mock_role: String,
}

fn default_app_name() -> String {
    "Delivery App Builder".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_filter() -> String {
    "delivery_app_builder=debug".to_string()
}

fn default_mock_role() -> String {
    "guest".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            log_level: default_log_level(),
            log_filter: default_log_filter(),
            scroll: ScrollSettings::default(),
            mock_role: default_mock_role(),
        }
    }
}

impl Config {
    /// `log_level` as a tracing level, `INFO` when unrecognized.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown log level {:?}, using info", self.log_level);
            tracing::Level::INFO
        })
    }
}

/// Config file base name (extension picked by the `config` crate).
const CONFIG_FILE_STEM: &str = "shell";

/// Get config directory (DAB_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("DAB_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support/delivery-app-builder");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("delivery-app-builder");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/delivery-app-builder");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("delivery-app-builder");
        }
    }

    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let mut builder = ::config::Config::builder()
        .set_default("app_name", default_app_name())?
        .set_default("log_level", default_log_level())?
        .set_default("log_filter", default_log_filter())?
        .set_default("mock_role", default_mock_role())?;

    // The browser has no filesystem; only native builds look for a file.
    #[cfg(not(target_arch = "wasm32"))]
    {
        let file = get_config_dir().join(CONFIG_FILE_STEM);
        builder = builder
            .add_source(::config::File::with_name(&file.to_string_lossy()).required(false));
    }

    builder = builder.add_source(
        ::config::Environment::with_prefix("DAB")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

/// `load_config`, falling back to defaults when any source is invalid.
pub fn load_config_or_default() -> Config {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid configuration, using defaults: {}", e);
            Config::default()
        }
    }
}
