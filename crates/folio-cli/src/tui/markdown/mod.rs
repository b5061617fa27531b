//! Markdown rendering for the content pane
//!
//! Documents are rendered once per (tab, width) into styled lines plus the
//! row of every heading, which is what the navigation engine observes.

mod cache;
mod renderer;
mod wrap;

pub use cache::DocumentCache;
pub use renderer::render_markdown;

use ratatui::text::Line;

/// Where a heading landed in the rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingAnchor {
    pub id: String,
    pub level: u8,
    /// First row of the heading
    pub row: usize,
    /// Rows the heading occupies once wrapped
    pub rows: usize,
}

/// A document laid out for one width
#[derive(Debug, Clone, Default)]
pub struct RenderedDocument {
    pub lines: Vec<Line<'static>>,
    pub headings: Vec<HeadingAnchor>,
}

impl RenderedDocument {
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            headings: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn heading(&self, id: &str) -> Option<&HeadingAnchor> {
        self.headings.iter().find(|h| h.id == id)
    }
}
