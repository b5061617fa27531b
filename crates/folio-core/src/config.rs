//! User configuration (`~/.folio/config.toml`)
//!
//! Every field is optional; anything missing falls back to the defaults in
//! [`crate::constants`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{content::HOME_TAB_ID, nav};
use crate::error::{FolioError, Result};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Tab shown when the location names no (known) tab
    pub default_tab: String,
    /// Content directory with a `site.toml`; `None` uses the built-in site
    pub content_dir: Option<PathBuf>,
    /// Navigation engine tuning
    pub navigation: NavigationConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            default_tab: HOME_TAB_ID.to_string(),
            content_dir: None,
            navigation: NavigationConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| FolioError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a config file, returning defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text, path)
    }
}

/// Timing and geometry constants of the navigation engine.
///
/// These are empirically chosen UX values. No relationship between them is
/// enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub wheel_threshold: f64,
    pub wheel_cooldown_ms: u64,
    pub boundary_dwell_ms: u64,
    pub switch_guard_ms: u64,
    pub switch_settle_ms: u64,
    pub heading_subscribe_delay_ms: u64,
    pub heading_zone_ratio: f64,
    pub line_height_px: f64,
    pub bottom_tolerance_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: nav::WHEEL_THRESHOLD,
            wheel_cooldown_ms: nav::WHEEL_COOLDOWN.as_millis() as u64,
            boundary_dwell_ms: nav::BOUNDARY_DWELL.as_millis() as u64,
            switch_guard_ms: nav::SWITCH_GUARD.as_millis() as u64,
            switch_settle_ms: nav::SWITCH_SETTLE.as_millis() as u64,
            heading_subscribe_delay_ms: nav::HEADING_SUBSCRIBE_DELAY.as_millis() as u64,
            heading_zone_ratio: nav::HEADING_ZONE_RATIO,
            line_height_px: nav::LINE_HEIGHT_PX,
            bottom_tolerance_px: nav::BOTTOM_TOLERANCE_PX,
        }
    }
}

impl NavigationConfig {
    pub fn wheel_cooldown(&self) -> Duration {
        Duration::from_millis(self.wheel_cooldown_ms)
    }

    pub fn boundary_dwell(&self) -> Duration {
        Duration::from_millis(self.boundary_dwell_ms)
    }

    pub fn switch_guard(&self) -> Duration {
        Duration::from_millis(self.switch_guard_ms)
    }

    pub fn switch_settle(&self) -> Duration {
        Duration::from_millis(self.switch_settle_ms)
    }

    pub fn heading_subscribe_delay(&self) -> Duration {
        Duration::from_millis(self.heading_subscribe_delay_ms)
    }
}
