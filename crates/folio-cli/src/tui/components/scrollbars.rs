//! Scrollbar rendering
//!
//! 1-char wide, filled track with the thumb inside.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, Frame};

use crate::tui::themes::Theme;

/// Buffer-based scrollbar: ░ track, █ thumb
pub fn render_scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    thumb_color: Color,
    track_color: Color,
) {
    // Clear first so no stale glyphs remain when the bar disappears
    for y in area.y..area.y + area.height {
        if let Some(cell) = buf.cell_mut((area.x, y)) {
            cell.set_char(' ');
            cell.set_fg(Color::Reset);
        }
    }

    if total <= visible || area.height == 0 {
        return;
    }

    let height = area.height as usize;
    let thumb_size = ((visible as f32 / total as f32) * height as f32)
        .max(2.0)
        .min(height as f32)
        .round() as usize;

    let max_offset = total - visible;
    let thumb_pos = ((offset.min(max_offset) as f32 / max_offset as f32)
        * height.saturating_sub(thumb_size) as f32)
        .round() as usize;

    for y in 0..height {
        let is_thumb = y >= thumb_pos && y < thumb_pos + thumb_size;
        let (ch, color) = if is_thumb {
            ('█', thumb_color)
        } else {
            ('░', track_color)
        };
        if let Some(cell) = buf.cell_mut((area.x, area.y + y as u16)) {
            cell.set_char(ch).set_fg(color);
        }
    }
}

/// Scrollbar for the page, thumb in the active tab's color
pub fn render_content_scrollbar(
    f: &mut Frame,
    area: Rect,
    offset: usize,
    total_rows: usize,
    visible_rows: usize,
    accent: Color,
    theme: &Theme,
) {
    render_scrollbar(
        f.buffer_mut(),
        area,
        offset,
        total_rows,
        visible_rows,
        accent,
        theme.scrollbar_bg_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(buf: &Buffer, area: Rect) -> String {
        (area.y..area.y + area.height)
            .map(|y| buf[(area.x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_thumb_tracks_offset() {
        let area = Rect::new(0, 0, 1, 10);
        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 0, 100, 20, Color::Red, Color::Gray);
        assert_eq!(column(&buf, area), "██░░░░░░░░");

        render_scrollbar(&mut buf, area, 80, 100, 20, Color::Red, Color::Gray);
        assert_eq!(column(&buf, area), "░░░░░░░░██");
    }

    #[test]
    fn test_no_bar_when_everything_fits() {
        let area = Rect::new(0, 0, 1, 4);
        let mut buf = Buffer::empty(area);
        render_scrollbar(&mut buf, area, 0, 100, 20, Color::Red, Color::Gray);
        render_scrollbar(&mut buf, area, 0, 3, 4, Color::Red, Color::Gray);
        assert_eq!(column(&buf, area), "    ");
    }
}
