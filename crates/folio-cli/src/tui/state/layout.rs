//! Layout State - Centralized layout area tracking
//!
//! Owns all cached layout rectangles used for hit testing and rendering.

use ratatui::layout::{Position, Rect};

/// Cached layout areas for hit testing and rendering
///
/// Updated each frame during rendering, used for mouse event handling.
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Profile sidebar (hidden on narrow terminals)
    pub sidebar_area: Option<Rect>,
    /// Scrollable page text; wheel input here is inner
    pub content_area: Option<Rect>,
    /// Content scrollbar track
    pub content_scrollbar_area: Option<Rect>,
    /// Clickable tab buttons and the tab index each selects
    pub tab_hits: Vec<(Rect, usize)>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a point lies on the scrollable page
    pub fn is_inside_content(&self, x: u16, y: u16) -> bool {
        self.content_area
            .is_some_and(|area| area.contains(Position::new(x, y)))
    }

    /// Whether a point lies on the content scrollbar track
    pub fn is_on_scrollbar(&self, x: u16, y: u16) -> bool {
        self.content_scrollbar_area
            .is_some_and(|area| area.contains(Position::new(x, y)))
    }

    /// Tab under a point, if any
    pub fn tab_at(&self, x: u16, y: u16) -> Option<usize> {
        self.tab_hits
            .iter()
            .find(|(area, _)| area.contains(Position::new(x, y)))
            .map(|(_, index)| *index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_testing() {
        let mut layout = LayoutState::new();
        layout.content_area = Some(Rect::new(10, 3, 40, 20));
        layout.tab_hits = vec![(Rect::new(10, 0, 6, 3), 0), (Rect::new(17, 0, 8, 3), 1)];

        assert!(layout.is_inside_content(10, 3));
        assert!(!layout.is_inside_content(9, 3));
        assert!(!layout.is_inside_content(10, 23));
        assert_eq!(layout.tab_at(18, 1), Some(1));
        assert_eq!(layout.tab_at(16, 1), None);

        layout.content_scrollbar_area = Some(Rect::new(49, 4, 1, 18));
        assert!(layout.is_on_scrollbar(49, 10));
        assert!(!layout.is_on_scrollbar(48, 10));
    }
}
