//! Filesystem locations for config, logs, and persisted state

use std::path::PathBuf;

use crate::constants::ui::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, LOCATION_FILE_NAME};

/// Root config directory (`~/.folio`), falling back to the working directory
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Default config file path
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Log directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// File the viewer persists its last location fragment to
pub fn location_file() -> PathBuf {
    config_dir().join(LOCATION_FILE_NAME)
}
