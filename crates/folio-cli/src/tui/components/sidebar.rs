//! Profile sidebar - owner name, title, contact details and links

use folio_core::content::Profile;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use crate::tui::themes::Theme;
use crate::tui::utils::{truncate_ellipsis, wrap_text};

/// Sidebar columns, including padding
pub const SIDEBAR_WIDTH: u16 = 28;

/// Narrower terminals hide the sidebar
pub const MIN_WIDTH_FOR_SIDEBAR: u16 = 80;

const PADDING: u16 = 2;

fn sidebar_lines(profile: &Profile, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let name_style = Style::default()
        .fg(theme.sidebar_name_color)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(theme.sidebar_text_color);
    let label_style = Style::default().fg(theme.kraft_light_color);

    let mut lines = Vec::new();
    for row in wrap_text(&profile.name, width) {
        lines.push(Line::from(Span::styled(row, name_style)));
    }
    for row in wrap_text(&profile.title, width) {
        lines.push(Line::from(Span::styled(row, text_style)));
    }
    if !profile.subtitle.is_empty() {
        lines.push(Line::default());
        for row in wrap_text(&profile.subtitle, width) {
            lines.push(Line::from(Span::styled(
                row,
                text_style.add_modifier(Modifier::ITALIC),
            )));
        }
    }

    let contacts = [
        Some(("✉", profile.email.as_str())).filter(|(_, v)| !v.is_empty()),
        profile.phone.as_deref().map(|v| ("☎", v)),
        profile.location.as_deref().map(|v| ("⌖", v)),
    ];
    if contacts.iter().any(Option::is_some) {
        lines.push(Line::default());
    }
    for (icon, value) in contacts.into_iter().flatten() {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", icon), label_style),
            Span::styled(
                truncate_ellipsis(value, width.saturating_sub(2)),
                text_style,
            ),
        ]));
    }

    if !profile.links.is_empty() {
        lines.push(Line::default());
        for link in &profile.links {
            lines.push(Line::from(Span::styled(
                truncate_ellipsis(&link.label, width),
                label_style.add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                truncate_ellipsis(&link.url, width),
                text_style.add_modifier(Modifier::UNDERLINED),
            )));
        }
    }

    lines
}

pub fn render_sidebar(f: &mut Frame, area: Rect, profile: &Profile, theme: &Theme) {
    let block = Block::default()
        .style(Style::default().bg(theme.sidebar_bg_color))
        .padding(Padding::new(PADDING, PADDING, 1, 1));
    let width = area.width.saturating_sub(PADDING * 2) as usize;
    let lines = sidebar_lines(profile, width, theme);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::SocialLink;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lists_contacts_and_links() {
        let profile = Profile {
            name: "Ada Lovelace".into(),
            title: "Engineer".into(),
            subtitle: String::new(),
            email: "ada@example.com".into(),
            phone: None,
            location: Some("London".into()),
            links: vec![SocialLink {
                label: "GitHub".into(),
                url: "https://github.com/ada".into(),
            }],
        };
        let text: Vec<String> = sidebar_lines(&profile, 24, &Theme::notebook())
            .iter()
            .map(line_text)
            .collect();

        assert_eq!(text[0], "Ada Lovelace");
        assert!(text.contains(&"✉ ada@example.com".to_string()));
        assert!(text.contains(&"⌖ London".to_string()));
        assert!(!text.iter().any(|l| l.starts_with('☎')));
        assert!(text.contains(&"GitHub".to_string()));
    }

    #[test]
    fn test_long_name_wraps() {
        let profile = Profile {
            name: "Augusta Ada King Countess of Lovelace".into(),
            title: "Engineer".into(),
            subtitle: String::new(),
            email: String::new(),
            phone: None,
            location: None,
            links: Vec::new(),
        };
        let lines = sidebar_lines(&profile, 12, &Theme::notebook());
        assert!(lines.len() > 2);
        assert!(lines.iter().all(|l| l.width() <= 12));
    }
}
