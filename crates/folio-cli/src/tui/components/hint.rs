//! Boundary hint overlay
//!
//! A floating rounded box naming the tab a continued scroll lands on.
//! Drawn at the bottom of the page when scrolling down, the top when up.
//! Display only: the box never takes input.

use folio_core::nav::{Direction, Hint};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, Frame};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Box height including borders
const HINT_HEIGHT: u16 = 3;

/// Rows kept between the box and the page edge
const EDGE_MARGIN: u16 = 1;

/// Where the box goes inside the content area
fn hint_rect(area: Rect, text_width: u16, direction: Direction) -> Option<Rect> {
    if area.height < HINT_HEIGHT || area.width < 8 {
        return None;
    }
    let width = (text_width + 4).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let margin = EDGE_MARGIN.min(area.height - HINT_HEIGHT);
    let y = match direction {
        Direction::Down => area.y + area.height - HINT_HEIGHT - margin,
        Direction::Up => area.y + margin,
    };
    Some(Rect::new(x, y, width, HINT_HEIGHT))
}

pub fn render_hint(f: &mut Frame, area: Rect, hint: &Hint, theme: &Theme) {
    draw_hint(f.buffer_mut(), area, hint, theme);
}

fn draw_hint(buf: &mut Buffer, area: Rect, hint: &Hint, theme: &Theme) {
    let message = hint.message();
    let Some(rect) = hint_rect(area, message.width() as u16, hint.direction) else {
        return;
    };

    let color = theme.tab_color(hint.target.color);
    let border_style = Style::default().fg(color).bg(theme.bg_color);
    let right = rect.x + rect.width - 1;
    let bottom = rect.y + rect.height - 1;

    for y in rect.y..=bottom {
        for x in rect.x..=right {
            let ch = match (x == rect.x, x == right, y == rect.y, y == bottom) {
                (true, _, true, _) => '╭',
                (_, true, true, _) => '╮',
                (true, _, _, true) => '╰',
                (_, true, _, true) => '╯',
                (true, _, _, _) | (_, true, _, _) => '│',
                (_, _, true, _) | (_, _, _, true) => '─',
                _ => ' ',
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(ch).set_style(border_style);
            }
        }
    }

    let text = truncate_ellipsis(&message, rect.width.saturating_sub(4) as usize);
    buf.set_string(
        rect.x + 2,
        rect.y + 1,
        &text,
        Style::default().fg(theme.text_color).bg(theme.bg_color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::nav::{ColorToken, TabDefinition, TabIcon};

    fn hint(direction: Direction) -> Hint {
        Hint {
            target: TabDefinition::new("career", "Career", TabIcon::None, ColorToken::Palette(1)),
            target_index: 2,
            direction,
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_down_hint_sits_at_bottom() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        draw_hint(&mut buf, area, &hint(Direction::Down), &Theme::notebook());

        assert!(row(&buf, 17).contains("Scroll to continue → Career"));
        assert!(row(&buf, 16).contains('╭'));
        assert!(row(&buf, 18).contains('╯'));
        assert!(row(&buf, 2).trim().is_empty());
    }

    #[test]
    fn test_up_hint_sits_at_top() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        draw_hint(&mut buf, area, &hint(Direction::Up), &Theme::notebook());

        assert!(row(&buf, 2).contains("Career ← Scroll to continue"));
    }

    #[test]
    fn test_tiny_area_draws_nothing() {
        let area = Rect::new(0, 0, 60, 2);
        let mut buf = Buffer::empty(area);
        draw_hint(&mut buf, area, &hint(Direction::Down), &Theme::notebook());
        assert!(row(&buf, 0).trim().is_empty());
    }
}
