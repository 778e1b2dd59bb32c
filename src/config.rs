//! Driver configuration
//!
//! Stored as TOML; every field has a default so a partial or missing file
//! works.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "logi_driver=info,logi_led=info,logi_arx=info";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Explicit path to `LogitechLed.dll`; searched for when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub led_library: Option<PathBuf>,
    /// Explicit path to `LogitechGArxControl.dll`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arx_library: Option<PathBuf>,
    pub log_filter: String,
    /// Wait after SDK init before the first call (ms)
    pub startup_delay_ms: u64,
    pub applet: AppletConfig,
}

/// Identity the demo applet registers with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppletConfig {
    pub identifier: String,
    pub friendly_name: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            led_library: None,
            arx_library: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            startup_delay_ms: 1000,
            applet: AppletConfig::default(),
        }
    }
}

impl Default for AppletConfig {
    fn default() -> Self {
        Self {
            identifier: "com.logi-driver.demo".to_string(),
            friendly_name: "logi-driver demo".to_string(),
        }
    }
}

impl DriverConfig {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("logi-driver")
            .join("config.toml")
    }

    /// Load config from a file, or return defaults if not found
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: DriverConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line library overrides
    pub fn with_overrides(
        mut self,
        led_library: Option<PathBuf>,
        arx_library: Option<PathBuf>,
    ) -> Self {
        if led_library.is_some() {
            self.led_library = led_library;
        }
        if arx_library.is_some() {
            self.arx_library = arx_library;
        }
        self
    }
}
