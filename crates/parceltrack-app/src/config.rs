//! Settings loader for ~/.config/parceltrack/config.toml
//!
//! Every section is defaulted so a missing or partial file always yields a
//! usable configuration. A malformed file is a hard error rather than a
//! silent fallback.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use parceltrack_core::prelude::*;

const CONFIG_DIR: &str = "parceltrack";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_BASE_URL: &str = "http://localhost:9090/delivery-tracking";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_TOAST_DURATION_MS: u64 = 2_000;

/// Application settings from the config file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the delivery-tracking service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// UI behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a toast stays on screen, in milliseconds
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

/// Default config file location: `~/.config/parceltrack/config.toml`
pub fn config_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `path`, or the default location when `None`.
///
/// A missing file yields defaults; a file that exists but does not parse is
/// an [`Error::Config`].
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&contents)
        .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
    info!("Loaded config from {}", path.display());
    Ok(settings)
}
