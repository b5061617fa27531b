//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// Navigation timing and geometry defaults
pub mod nav {
    use super::*;

    /// Outer wheel deltas below this magnitude are treated as jitter
    pub const WHEEL_THRESHOLD: f64 = 10.0;

    /// Lockout after an outer wheel event switched tabs
    pub const WHEEL_COOLDOWN: Duration = Duration::from_millis(120);

    /// How long boundary wheel ticks are absorbed before they pass through
    pub const BOUNDARY_DWELL: Duration = Duration::from_millis(400);

    /// Window after a tab switch in which inner wheel input is swallowed
    pub const SWITCH_GUARD: Duration = Duration::from_millis(500);

    /// Window after a tab switch in which heading reports are suppressed
    pub const SWITCH_SETTLE: Duration = Duration::from_millis(400);

    /// Delay before headings of freshly mounted content are observed
    pub const HEADING_SUBSCRIBE_DELAY: Duration = Duration::from_millis(100);

    /// Fraction of the content pane (from the top) that counts as "being read"
    pub const HEADING_ZONE_RATIO: f64 = 0.2;

    /// Pixels per line for line-mode wheel deltas
    pub const LINE_HEIGHT_PX: f64 = 40.0;

    /// Sub-pixel slack when deciding whether content is scrolled to the bottom
    pub const BOTTOM_TOLERANCE_PX: f64 = 1.0;

    /// Frames to wait after a tab switch before scrolling to a pending heading
    pub const PENDING_SCROLL_FRAMES: u8 = 2;
}

/// Site content defaults
pub mod content {
    /// Id of the cover tab that always comes first
    pub const HOME_TAB_ID: &str = "home";

    /// Id of the settings tab that always comes last
    pub const SETTINGS_TAB_ID: &str = "settings";

    /// Number of palette colors content tabs cycle through
    pub const PALETTE_SIZE: u8 = 5;

    /// Manifest file name inside a content directory
    pub const MANIFEST_FILE: &str = "site.toml";
}

/// UI configuration
pub mod ui {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".folio";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// File holding the last visited location fragment
    pub const LOCATION_FILE_NAME: &str = "location";
}
