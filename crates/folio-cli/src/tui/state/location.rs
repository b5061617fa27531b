//! Last visited location, kept between runs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read the saved fragment; missing or blank files yield `None`
pub fn load_saved_location(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            let fragment = text.trim();
            (!fragment.is_empty()).then(|| fragment.to_string())
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No saved location");
            None
        }
    }
}

/// Write the current fragment, creating the parent directory if needed
pub fn save_location(path: &Path, fragment: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, fragment).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_through_nested_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state").join("location");
        save_location(&path, "projects/project-beta").unwrap();
        assert_eq!(
            load_saved_location(&path).as_deref(),
            Some("projects/project-beta")
        );
    }

    #[test]
    fn test_missing_or_blank_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("location");
        assert_eq!(load_saved_location(&path), None);
        fs::write(&path, "  \n").unwrap();
        assert_eq!(load_saved_location(&path), None);
    }
}
