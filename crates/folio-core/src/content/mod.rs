//! Site content: owner records, tab order, and per-tab documents

mod resume;
mod site;
pub mod slug;

pub use resume::{
    Career, Certification, Education, Profile, Project, ResumeData, SkillCategory, SocialLink,
};
pub use site::{ContentTab, Site};
pub use slug::Slugger;

/// What a tab renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    /// Cover page built from the profile
    Cover,
    /// Markdown document
    Markdown(String),
}
