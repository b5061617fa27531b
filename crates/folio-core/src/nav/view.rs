//! Content pane collaborator

use super::boundary::ScrollMetrics;
use super::headings::HeadingBox;

/// How a heading is brought into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// The scrollable container that shows the active tab's content.
///
/// Units are up to the host (pixels in a browser, scaled rows in a
/// terminal) but must be consistent across all methods.
pub trait ContentView {
    /// Current scroll offset and dimensions
    fn metrics(&self) -> ScrollMetrics;

    /// Scroll by `dy`, clamped to the scrollable range
    fn scroll_by(&mut self, dy: f64);

    /// Swap in the content of `tab_id` and return to the top
    fn mount(&mut self, tab_id: &str);

    /// Laid-out headings (levels 1-3 with ids) in content coordinates.
    /// Empty until the mounted content has been laid out.
    fn headings(&self) -> Vec<HeadingBox>;

    /// Align the heading with exactly this id to the top edge.
    /// Returns false when no such heading exists.
    fn scroll_into_view(&mut self, heading_id: &str, behavior: ScrollBehavior) -> bool;
}
