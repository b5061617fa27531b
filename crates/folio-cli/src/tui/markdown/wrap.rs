//! Word wrapping that keeps span styles

use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

/// Wrap styled spans into rows of at most `width` columns.
///
/// Breaks at spaces; a single word wider than `width` gets a row of its own.
pub fn wrap_spans(spans: &[Span<'static>], width: usize) -> Vec<Vec<Span<'static>>> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut col = 0usize;

    for span in spans {
        for word in span.content.split_inclusive(' ') {
            let visible = word.trim_end_matches(' ').width();
            if col > 0 && col + visible > width {
                trim_trailing_space(&mut current);
                rows.push(std::mem::take(&mut current));
                col = 0;
            }
            if col == 0 && word.trim().is_empty() {
                continue;
            }
            col += word.width();
            current.push(Span::styled(word.to_string(), span.style));
        }
    }

    trim_trailing_space(&mut current);
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn trim_trailing_space(row: &mut Vec<Span<'static>>) {
    if let Some(last) = row.last_mut() {
        let trimmed = last.content.trim_end_matches(' ');
        if trimmed.len() != last.content.len() {
            last.content = trimmed.to_string().into();
        }
    }
}
