//! Tab strip - colored index tabs along the top of the page

use folio_core::nav::{TabDefinition, TabIcon, TabSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Rows the strip occupies; the active tab is one row taller than the rest
pub const TAB_STRIP_HEIGHT: u16 = 3;

/// Widest a single tab may get
const MAX_TAB_WIDTH: u16 = 18;

/// Gap between tabs
const TAB_GAP: u16 = 1;

/// Text shown on a tab: the icon glyph for icon tabs, the label otherwise
fn tab_title(tab: &TabDefinition) -> String {
    match tab.icon {
        TabIcon::Home => "⌂".to_string(),
        TabIcon::Settings => "⚙".to_string(),
        TabIcon::None => tab.label.clone(),
    }
}

/// Column widths for each tab, shrunk evenly when the strip is too narrow
fn tab_widths(tabs: &TabSet, available: u16) -> Vec<u16> {
    let natural: Vec<u16> = tabs
        .iter()
        .map(|tab| (tab_title(tab).width() as u16 + 4).min(MAX_TAB_WIDTH))
        .collect();
    let gaps = TAB_GAP * natural.len().saturating_sub(1) as u16;
    let total: u16 = natural.iter().sum::<u16>() + gaps;
    if total <= available || natural.is_empty() {
        return natural;
    }

    let per_tab = (available.saturating_sub(gaps) / natural.len() as u16).max(3);
    natural.into_iter().map(|w| w.min(per_tab)).collect()
}

/// Draw the strip and return the clickable rect of every visible tab
pub fn render_tab_strip(
    f: &mut Frame,
    area: Rect,
    tabs: &TabSet,
    active: usize,
    theme: &Theme,
) -> Vec<(Rect, usize)> {
    draw_tab_strip(f.buffer_mut(), area, tabs, active, theme)
}

fn draw_tab_strip(
    buf: &mut Buffer,
    area: Rect,
    tabs: &TabSet,
    active: usize,
    theme: &Theme,
) -> Vec<(Rect, usize)> {
    buf.set_style(area, Style::default().bg(theme.bg_color));
    if area.height == 0 || area.width == 0 {
        return Vec::new();
    }

    let widths = tab_widths(tabs, area.width);
    let mut hits = Vec::with_capacity(widths.len());
    let mut x = area.x;
    let right = area.x + area.width;

    for (index, (tab, width)) in tabs.iter().zip(widths).enumerate() {
        if x >= right {
            break;
        }
        let width = width.min(right - x);
        let is_active = index == active;

        // Inactive tabs sit one row lower so the active one stands out
        let top = if is_active {
            area.y
        } else {
            area.y + 1u16.min(area.height - 1)
        };
        let rect = Rect::new(x, top, width, area.y + area.height - top);

        let color = theme.tab_color(tab.color);
        buf.set_style(rect, Style::default().bg(color));

        let mut text_style = Style::default().fg(theme.tab_text_color).bg(color);
        if is_active {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }
        let title = truncate_ellipsis(&tab_title(tab), width.saturating_sub(2) as usize);
        let text_x = x + (width.saturating_sub(title.width() as u16)) / 2;
        let text_y = rect.y + rect.height.saturating_sub(1) / 2;
        buf.set_string(text_x, text_y, &title, text_style);

        hits.push((rect, index));
        x = x.saturating_add(width + TAB_GAP);
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::nav::ColorToken;

    fn tabs() -> TabSet {
        TabSet::new(vec![
            TabDefinition::new("home", "", TabIcon::Home, ColorToken::Home),
            TabDefinition::new("about", "About", TabIcon::None, ColorToken::Palette(0)),
            TabDefinition::new("career", "Career", TabIcon::None, ColorToken::Palette(1)),
            TabDefinition::new("settings", "", TabIcon::Settings, ColorToken::Settings),
        ])
        .unwrap()
    }

    #[test]
    fn test_active_tab_is_taller() {
        let area = Rect::new(0, 0, 60, TAB_STRIP_HEIGHT);
        let mut buf = Buffer::empty(area);
        let hits = draw_tab_strip(&mut buf, area, &tabs(), 1, &Theme::notebook());

        assert_eq!(hits.len(), 4);
        assert_eq!(hits[1].0.height, 3);
        assert_eq!(hits[0].0.height, 2);
        assert_eq!(hits[0].0.y, 1);
        assert_eq!(hits[1].1, 1);
    }

    #[test]
    fn test_icon_tabs_show_glyphs() {
        let area = Rect::new(0, 0, 60, TAB_STRIP_HEIGHT);
        let mut buf = Buffer::empty(area);
        let hits = draw_tab_strip(&mut buf, area, &tabs(), 0, &Theme::notebook());

        let home = hits[0].0;
        let row: String = (home.x..home.x + home.width)
            .map(|x| buf[(x, home.y + 1)].symbol().to_string())
            .collect();
        assert!(row.contains('⌂'));
    }

    #[test]
    fn test_hits_do_not_overlap() {
        let area = Rect::new(0, 0, 20, TAB_STRIP_HEIGHT);
        let mut buf = Buffer::empty(area);
        let hits = draw_tab_strip(&mut buf, area, &tabs(), 2, &Theme::notebook());

        for pair in hits.windows(2) {
            assert!(pair[0].0.x + pair[0].0.width <= pair[1].0.x);
        }
        assert!(hits.iter().all(|(r, _)| r.x + r.width <= 20));
    }
}
