//! Tab definitions and the ordered tab sequence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Icon drawn instead of a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabIcon {
    Home,
    Settings,
    None,
}

/// Theme color token of a tab; front-ends map tokens to concrete colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Home,
    Settings,
    /// Zero-based slot in the content tab palette
    Palette(u8),
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorToken::Home => write!(f, "tab-home"),
            ColorToken::Settings => write!(f, "tab-settings"),
            ColorToken::Palette(slot) => write!(f, "tab-palette-{}", slot + 1),
        }
    }
}

/// One navigable tab. Immutable once the set is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDefinition {
    pub id: String,
    pub label: String,
    pub icon: TabIcon,
    pub color: ColorToken,
}

impl TabDefinition {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: TabIcon,
        color: ColorToken,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            color,
        }
    }

    /// Human-readable name, falling back to the icon for label-less tabs
    pub fn display_name(&self) -> &str {
        if !self.label.is_empty() {
            return &self.label;
        }
        match self.icon {
            TabIcon::Home => "Home",
            TabIcon::Settings => "Settings",
            TabIcon::None => &self.id,
        }
    }
}

/// Ordered, non-empty tab sequence with unique ids.
///
/// Sequence order is navigation order: wheel steps move by one position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<TabDefinition>,
}

impl TabSet {
    pub fn new(tabs: Vec<TabDefinition>) -> Result<Self> {
        if tabs.is_empty() {
            return Err(FolioError::EmptyTabSet);
        }
        for (i, tab) in tabs.iter().enumerate() {
            if tab.id.is_empty() || tab.id.contains('/') {
                return Err(FolioError::InvalidTabId(tab.id.clone()));
            }
            if tabs[..i].iter().any(|t| t.id == tab.id) {
                return Err(FolioError::DuplicateTab(tab.id.clone()));
            }
        }
        Ok(Self { tabs })
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TabDefinition> {
        self.tabs.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Neighbor of `index` one step forward or back, `None` past either end
    pub fn step(&self, index: usize, forward: bool) -> Option<usize> {
        if forward {
            (index + 1 < self.tabs.len()).then_some(index + 1)
        } else {
            index.checked_sub(1)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TabDefinition> {
        self.tabs.iter()
    }
}

impl std::ops::Index<usize> for TabSet {
    type Output = TabDefinition;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tabs[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: &str) -> TabDefinition {
        TabDefinition::new(id, id.to_uppercase(), TabIcon::None, ColorToken::Palette(0))
    }

    #[test]
    fn test_rejects_empty_set() {
        assert!(matches!(TabSet::new(vec![]), Err(FolioError::EmptyTabSet)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = TabSet::new(vec![tab("a"), tab("b"), tab("a")]).unwrap_err();
        assert!(matches!(err, FolioError::DuplicateTab(id) if id == "a"));
    }

    #[test]
    fn test_rejects_ids_that_cannot_round_trip() {
        assert!(matches!(
            TabSet::new(vec![tab("a/b")]),
            Err(FolioError::InvalidTabId(_))
        ));
        assert!(matches!(
            TabSet::new(vec![tab("")]),
            Err(FolioError::InvalidTabId(_))
        ));
    }

    #[test]
    fn test_step_clamps_at_ends() {
        let set = TabSet::new(vec![tab("a"), tab("b"), tab("c")]).unwrap();
        assert_eq!(set.step(0, false), None);
        assert_eq!(set.step(0, true), Some(1));
        assert_eq!(set.step(2, true), None);
        assert_eq!(set.step(2, false), Some(1));
    }

    #[test]
    fn test_display_name_falls_back_to_icon() {
        let home = TabDefinition::new("home", "", TabIcon::Home, ColorToken::Home);
        let settings = TabDefinition::new("settings", "", TabIcon::Settings, ColorToken::Settings);
        assert_eq!(home.display_name(), "Home");
        assert_eq!(settings.display_name(), "Settings");
        assert_eq!(tab("about").display_name(), "ABOUT");
    }

    #[test]
    fn test_color_token_names() {
        assert_eq!(ColorToken::Home.to_string(), "tab-home");
        assert_eq!(ColorToken::Palette(0).to_string(), "tab-palette-1");
    }
}
