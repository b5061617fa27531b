//! Heading ids derived from heading text
//!
//! Ids follow the GitHub convention: lowercase, punctuation dropped, spaces
//! turned into hyphens, and repeats within one document suffixed `-1`, `-2`.

use std::collections::HashMap;

/// Slug generator scoped to one document
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `text`, unique among the slugs this generator has produced
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        while let Some(count) = self.seen.get_mut(&candidate) {
            *count += 1;
            candidate = format!("{}-{}", base, count);
        }
        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}

/// Stateless slug of `text`
pub fn slugify(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Project Beta"), "project-beta");
        assert_eq!(slugify("  C++ & Rust!  "), "c--rust");
        assert_eq!(slugify("snake_case-ok"), "snake_case-ok");
        assert_eq!(slugify("경력 사항"), "경력-사항");
    }

    #[test]
    fn test_repeated_headings_are_suffixed() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Overview"), "overview");
        assert_eq!(slugger.slug("Overview"), "overview-1");
        assert_eq!(slugger.slug("Overview"), "overview-2");
        assert_eq!(slugger.slug("Overview 1"), "overview-1-1");
    }

    #[test]
    fn test_empty_heading_gives_empty_slug() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("?!"), "");
    }
}
