//! Bridge settings.
//!
//! Three user-facing knobs: the AirCon server address, the refresh interval
//! in minutes, and a debug flag. Settings load from an optional JSON file in
//! the platform config directory; CLI flags override file values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{AirconError, Result};
use crate::protocol::commands::COMMAND_PATH;
use crate::protocol::status::STATUS_PATH;

// =============================================================================
// Settings Path
// =============================================================================

const APP_NAME: &str = "hisense-aircon";
const SETTINGS_FILE: &str = "settings.json";

/// Default server authority, matching the service's usual local bind.
pub const DEFAULT_SERVER: &str = "localhost:8888";
/// Default refresh interval in minutes.
pub const DEFAULT_POLL_MINUTES: u64 = 5;

/// Get the settings directory path.
/// - Linux: ~/.config/hisense-aircon/
/// - Windows: %APPDATA%\hisense-aircon\
pub fn settings_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| AirconError::Config("Could not find config directory".into()))
}

/// Get the full path to the settings file.
pub fn settings_path() -> Result<PathBuf> {
    Ok(settings_dir()?.join(SETTINGS_FILE))
}

// =============================================================================
// Settings
// =============================================================================

/// User configuration for the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterSettings {
    /// AirCon server authority (`host[:port]`), used verbatim in the
    /// endpoint URLs.
    #[serde(default = "default_server")]
    pub server: String,

    /// Refresh interval in minutes.
    #[serde(default = "default_poll_minutes")]
    pub poll_minutes: u64,

    /// Verbose logging toggle.
    #[serde(default)]
    pub debug: bool,
}

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

fn default_poll_minutes() -> u64 {
    DEFAULT_POLL_MINUTES
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            server: default_server(),
            poll_minutes: default_poll_minutes(),
            debug: false,
        }
    }
}

impl AdapterSettings {
    /// Poll interval as a duration (minutes converted to seconds).
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_minutes * 60)
    }

    /// Full URL of the status endpoint.
    pub fn status_url(&self) -> String {
        format!("http://{}{}", self.server, STATUS_PATH)
    }

    /// Full URL of the command endpoint.
    pub fn command_url(&self) -> String {
        format!("http://{}{}", self.server, COMMAND_PATH)
    }
}

/// Load settings from disk, falling back to defaults when no file exists.
pub fn load_settings() -> Result<AdapterSettings> {
    let path = settings_path()?;

    if !path.exists() {
        return Ok(AdapterSettings::default());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| AirconError::Config(format!("Failed to read settings: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| AirconError::Config(format!("Failed to parse settings: {}", e)))
}

/// Save settings to disk, creating the directory if needed.
pub fn save_settings(settings: &AdapterSettings) -> Result<()> {
    let dir = settings_dir()?;
    let path = dir.join(SETTINGS_FILE);

    std::fs::create_dir_all(&dir)
        .map_err(|e| AirconError::Config(format!("Failed to create config dir: {}", e)))?;

    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| AirconError::Config(format!("Failed to serialize settings: {}", e)))?;

    std::fs::write(&path, content)
        .map_err(|e| AirconError::Config(format!("Failed to write settings: {}", e)))?;

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
