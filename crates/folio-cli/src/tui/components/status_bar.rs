//! Status bar component - bottom bar with location, tab, shortcuts

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Widest the location fragment may get before it is cut
const MAX_LOCATION_WIDTH: usize = 40;

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    location: &str,
    tab_label: &str,
    accent: Color,
) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let location_display = truncate_ellipsis(&format!("#{}", location), MAX_LOCATION_WIDTH);
    let left_spans = vec![
        Span::raw(" "),
        Span::styled(location_display.clone(), Style::default().fg(accent)),
        Span::styled(" │ ", Style::default().fg(theme.dim_color)),
        Span::styled(tab_label.to_string(), Style::default().fg(theme.dim_color)),
    ];
    let left_width = 1 + location_display.width() as u16 + 3 + tab_label.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Fill(1)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    let commands = build_commands_for_width(chunks[1].width as usize, theme);
    f.render_widget(
        Paragraph::new(Line::from(commands)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Fragment prompt in place of the status bar
pub fn render_prompt(f: &mut Frame, area: Rect, theme: &Theme, input: &str) {
    let style = Style::default()
        .bg(theme.status_bar_bg_color)
        .fg(theme.text_color);
    let line = Line::from(vec![
        Span::styled(" Go to #", style.fg(theme.dim_color)),
        Span::styled(input.to_string(), style),
        Span::styled("█", style.fg(theme.dim_color)),
    ]);
    f.render_widget(Paragraph::new(line).style(style), area);
}

/// Build command spans based on available width
/// Priority (highest to lowest): quit, tabs, goto, history
fn build_commands_for_width<'a>(width: usize, theme: &'a Theme) -> Vec<Span<'a>> {
    // (key_text, desc_text, total_width including spaces)
    let commands: [(&str, &str, usize); 4] = [
        (" q ", "quit ", 8),
        (" ←→ ", "tabs ", 9),
        (" g ", "go to ", 9),
        (" [ ] ", "back/fwd ", 14),
    ];

    let mut spans = Vec::new();
    let mut used_width = 0;

    for (key, desc, cmd_width) in commands {
        if used_width + cmd_width <= width {
            spans.push(Span::styled(
                key,
                Style::default().bg(theme.border_color).fg(theme.text_color),
            ));
            spans.push(Span::styled(desc, Style::default().fg(theme.dim_color)));
            used_width += cmd_width;
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_commands_drop_by_priority() {
        let theme = Theme::notebook();
        let all = text(&build_commands_for_width(80, &theme));
        assert!(all.contains("quit") && all.contains("back/fwd"));

        let narrow = text(&build_commands_for_width(17, &theme));
        assert!(narrow.contains("quit"));
        assert!(narrow.contains("tabs"));
        assert!(!narrow.contains("go to"));

        assert!(build_commands_for_width(5, &theme).is_empty());
    }

    #[test]
    fn test_declared_widths_match_text() {
        let theme = Theme::notebook();
        let spans = build_commands_for_width(200, &theme);
        for pair in spans.chunks(2) {
            let width = pair[0].content.width() + pair[1].content.width();
            assert!(width <= 14);
        }
        assert_eq!(text(&spans).width(), 8 + 9 + 9 + 14);
    }
}
