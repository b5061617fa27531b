//! Site assembly: tab order, palette assignment, and document loading
//!
//! A content directory holds a `site.toml` manifest next to the markdown
//! documents it names:
//!
//! ```toml
//! resume = "resume.json"
//! settings = "settings.md"
//!
//! [[tabs]]
//! id = "about"
//! label = "About"
//! file = "about.md"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use super::resume::ResumeData;
use super::TabContent;
use crate::constants::content::{HOME_TAB_ID, MANIFEST_FILE, PALETTE_SIZE, SETTINGS_TAB_ID};
use crate::error::{FolioError, Result};
use crate::nav::{ColorToken, TabDefinition, TabIcon, TabSet};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    resume: Option<PathBuf>,
    #[serde(default)]
    settings: Option<PathBuf>,
    #[serde(default)]
    tabs: Vec<ManifestTab>,
}

#[derive(Debug, Deserialize)]
struct ManifestTab {
    id: String,
    label: String,
    file: PathBuf,
}

/// A markdown tab before it is placed in the tab order
#[derive(Debug, Clone)]
pub struct ContentTab {
    pub id: String,
    pub label: String,
    pub markdown: String,
}

impl ContentTab {
    pub fn new(id: impl Into<String>, label: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            markdown: markdown.into(),
        }
    }
}

/// The whole notebook: owner records, tab order, and per-tab content
#[derive(Debug, Clone)]
pub struct Site {
    pub resume: ResumeData,
    pub tabs: TabSet,
    content: HashMap<String, TabContent>,
}

impl Site {
    /// Order tabs as home, content tabs, settings. Content tabs cycle
    /// through the palette in declaration order.
    pub fn assemble(
        resume: ResumeData,
        tabs: Vec<ContentTab>,
        settings: Option<String>,
    ) -> Result<Self> {
        let mut definitions = Vec::with_capacity(tabs.len() + 2);
        let mut content = HashMap::with_capacity(tabs.len() + 2);

        definitions.push(TabDefinition::new(
            HOME_TAB_ID,
            "",
            TabIcon::Home,
            ColorToken::Home,
        ));
        content.insert(HOME_TAB_ID.to_string(), TabContent::Cover);

        for (i, tab) in tabs.into_iter().enumerate() {
            let slot = (i % PALETTE_SIZE as usize) as u8;
            definitions.push(TabDefinition::new(
                tab.id.clone(),
                tab.label,
                TabIcon::None,
                ColorToken::Palette(slot),
            ));
            content.insert(tab.id, TabContent::Markdown(tab.markdown));
        }

        if let Some(markdown) = settings {
            definitions.push(TabDefinition::new(
                SETTINGS_TAB_ID,
                "",
                TabIcon::Settings,
                ColorToken::Settings,
            ));
            content.insert(SETTINGS_TAB_ID.to_string(), TabContent::Markdown(markdown));
        }

        Ok(Self {
            tabs: TabSet::new(definitions)?,
            resume,
            content,
        })
    }

    /// Load a site from a content directory
    pub fn load(dir: &Path) -> Result<Self> {
        let manifest_path = dir.join(MANIFEST_FILE);
        let text = fs::read_to_string(&manifest_path)?;
        let manifest: Manifest = toml::from_str(&text).map_err(|source| FolioError::Manifest {
            path: manifest_path.clone(),
            source,
        })?;

        let resume = match &manifest.resume {
            Some(file) => {
                let path = dir.join(file);
                let text = read_document("resume", &path)?;
                ResumeData::from_json(&text)
                    .map_err(|source| FolioError::Resume { path, source })?
            }
            None => {
                debug!(dir = %dir.display(), "No resume file in manifest, using empty profile");
                ResumeData::default()
            }
        };

        let mut tabs = Vec::with_capacity(manifest.tabs.len());
        for entry in manifest.tabs {
            let markdown = read_document(&entry.id, &dir.join(&entry.file))?;
            tabs.push(ContentTab::new(entry.id, entry.label, markdown));
        }

        let settings = manifest
            .settings
            .map(|file| read_document(SETTINGS_TAB_ID, &dir.join(file)))
            .transpose()?;

        let site = Self::assemble(resume, tabs, settings)?;
        info!(dir = %dir.display(), tabs = site.tabs.len(), "Loaded site");
        Ok(site)
    }

    /// The built-in sample notebook
    pub fn demo() -> Result<Self> {
        let resume = ResumeData::from_json(include_str!("../../demo/resume.json")).map_err(
            |source| FolioError::Resume {
                path: PathBuf::from("demo/resume.json"),
                source,
            },
        )?;
        let tabs = vec![
            ContentTab::new("about", "About", include_str!("../../demo/about.md")),
            ContentTab::new("career", "Career", include_str!("../../demo/career.md")),
            ContentTab::new("skills", "Skills", include_str!("../../demo/skills.md")),
            ContentTab::new("projects", "Projects", include_str!("../../demo/projects.md")),
            ContentTab::new("education", "Education", include_str!("../../demo/education.md")),
        ];
        Self::assemble(
            resume,
            tabs,
            Some(include_str!("../../demo/settings.md").to_string()),
        )
    }

    pub fn content(&self, tab_id: &str) -> Option<&TabContent> {
        self.content.get(tab_id)
    }
}

fn read_document(tab: &str, path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FolioError::MissingContent {
            tab: tab.to_string(),
            path: path.to_path_buf(),
        },
        _ => FolioError::Io(e),
    })
}
