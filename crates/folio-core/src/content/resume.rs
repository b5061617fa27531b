//! Resume records shown on the cover and in the profile sidebar

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    pub company: String,
    pub position: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub techs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Everything the site knows about its owner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub profile: Profile,
    pub about: Vec<String>,
    pub skills: Vec<SkillCategory>,
    pub careers: Vec<Career>,
    pub projects: Vec<Project>,
    pub educations: Vec<Education>,
    pub certifications: Vec<Certification>,
}

impl ResumeData {
    /// Parse resume records from JSON
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "profile": { "name": "Ada", "title": "Engineer" },
            "projects": [{ "title": "Engine" }]
        }"#;
        let resume = ResumeData::from_json(json).unwrap();
        assert_eq!(resume.profile.name, "Ada");
        assert!(resume.profile.links.is_empty());
        assert!(resume.profile.location.is_none());
        assert_eq!(resume.projects[0].title, "Engine");
        assert!(resume.projects[0].link.is_none());
        assert!(resume.careers.is_empty());
    }

    #[test]
    fn test_missing_required_field_is_error() {
        let json = r#"{ "careers": [{ "company": "Acme" }] }"#;
        assert!(ResumeData::from_json(json).is_err());
    }
}
