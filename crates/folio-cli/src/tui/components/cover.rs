//! Cover page for the home tab, built from the owner's profile

use folio_core::content::Profile;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::tui::markdown::RenderedDocument;
use crate::tui::themes::Theme;
use crate::tui::utils::wrap_text;

/// Blank rows above the title block
const TOP_MARGIN: usize = 2;

/// Decorative rule width
const RULE_WIDTH: usize = 16;

/// Widest the subtitle paragraph may get
const SUBTITLE_WIDTH: usize = 48;

fn centered(spans: Vec<Span<'static>>) -> Line<'static> {
    Line::from(spans).alignment(Alignment::Center)
}

/// Lay the cover out as a centered document `width` columns wide
pub fn render_cover(profile: &Profile, width: u16, accent: Color, theme: &Theme) -> RenderedDocument {
    let width = width.max(1) as usize;
    let rule = centered(vec![Span::styled(
        "━".repeat(RULE_WIDTH.min(width)),
        Style::default().fg(theme.border_color),
    )]);

    let mut lines = vec![Line::default(); TOP_MARGIN];
    lines.push(rule.clone());
    lines.push(Line::default());

    for row in wrap_text(&profile.name, width) {
        lines.push(centered(vec![Span::styled(
            row,
            Style::default()
                .fg(theme.text_color)
                .add_modifier(Modifier::BOLD),
        )]));
    }
    for row in wrap_text(&profile.title, width) {
        lines.push(centered(vec![Span::styled(
            row,
            Style::default().fg(theme.secondary_color),
        )]));
    }
    if !profile.subtitle.is_empty() {
        lines.push(Line::default());
        for row in wrap_text(&profile.subtitle, width.min(SUBTITLE_WIDTH)) {
            lines.push(centered(vec![Span::styled(
                row,
                Style::default().fg(theme.dim_color),
            )]));
        }
    }

    lines.push(Line::default());
    lines.push(rule);

    if !profile.email.is_empty() {
        lines.push(Line::default());
        lines.push(centered(vec![Span::styled(
            profile.email.clone(),
            Style::default().fg(theme.dim_color),
        )]));
    }
    if !profile.links.is_empty() {
        let mut spans = Vec::with_capacity(profile.links.len() * 2);
        for (i, link) in profile.links.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                link.label.clone(),
                Style::default().fg(accent).add_modifier(Modifier::UNDERLINED),
            ));
        }
        lines.push(centered(spans));
    }

    RenderedDocument::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::SocialLink;

    fn profile() -> Profile {
        Profile {
            name: "Ada Lovelace".into(),
            title: "Engineer".into(),
            subtitle: "Notes on the analytical engine".into(),
            email: "ada@example.com".into(),
            phone: None,
            location: None,
            links: vec![
                SocialLink {
                    label: "GitHub".into(),
                    url: "https://github.com/ada".into(),
                },
                SocialLink {
                    label: "Blog".into(),
                    url: "https://ada.example.com".into(),
                },
            ],
        }
    }

    fn text(doc: &RenderedDocument) -> Vec<String> {
        doc.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_cover_lists_profile_without_headings() {
        let doc = render_cover(&profile(), 60, Color::Red, &Theme::notebook());
        let rows = text(&doc);
        assert!(rows.contains(&"Ada Lovelace".to_string()));
        assert!(rows.contains(&"ada@example.com".to_string()));
        assert!(rows.contains(&"GitHub   Blog".to_string()));
        assert!(doc.headings.is_empty());
        assert!(doc
            .lines
            .iter()
            .filter(|l| l.width() > 0)
            .all(|l| l.alignment == Some(Alignment::Center)));
    }

    #[test]
    fn test_cover_fits_a_small_pane() {
        let doc = render_cover(&profile(), 60, Color::Red, &Theme::notebook());
        assert!(doc.height() < 20);
    }
}
