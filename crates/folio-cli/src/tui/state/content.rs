//! Terminal content pane as the engine's scroll container
//!
//! The engine thinks in pixels; the pane scrolls in rows. One row is
//! [`ROW_PX`] pixels, so a three-row wheel notch is 48 pixels, comfortably
//! above the jitter threshold.

use std::sync::Arc;

use folio_core::nav::{ContentView, HeadingBox, ScrollBehavior, ScrollMetrics};

use super::scroll::SmoothScroll;
use crate::tui::markdown::RenderedDocument;

/// Pixels per terminal row
pub const ROW_PX: f64 = 16.0;

/// Rows scrolled per mouse wheel notch
pub const WHEEL_NOTCH_ROWS: f64 = 3.0;

/// Scrollable document pane
#[derive(Debug, Default)]
pub struct TerminalContentView {
    tab_id: Option<String>,
    /// Document laid out for `tab_id`; `None` until the next draw
    document: Option<Arc<RenderedDocument>>,
    viewport_rows: u16,
    scroll_top: f64,
    smooth: SmoothScroll,
    dirty: bool,
}

impl TerminalContentView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tab currently mounted, laid out or not
    pub fn tab_id(&self) -> Option<&str> {
        self.tab_id.as_deref()
    }

    pub fn document(&self) -> Option<&RenderedDocument> {
        self.document.as_deref()
    }

    /// Install the document for the mounted tab and the pane height
    pub fn lay_out(&mut self, document: Arc<RenderedDocument>, viewport_rows: u16) {
        let changed = self
            .document
            .as_ref()
            .is_none_or(|current| !Arc::ptr_eq(current, &document))
            || self.viewport_rows != viewport_rows;
        self.document = Some(document);
        self.viewport_rows = viewport_rows;
        if changed {
            self.scroll_top = self.scroll_top.min(self.max_scroll_px());
        }
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    pub fn total_rows(&self) -> usize {
        self.document.as_ref().map_or(0, |d| d.height())
    }

    /// First row to draw, including any smooth-scroll displacement
    pub fn first_visible_row(&self) -> usize {
        let logical = (self.scroll_top / ROW_PX).round() as i64;
        let max_row = (self.max_scroll_px() / ROW_PX).round() as i64;
        (logical + self.smooth.row_offset()).clamp(0, max_row.max(0)) as usize
    }

    /// Advance the smooth-scroll animation; true while it is still moving
    pub fn tick_animation(&mut self) -> bool {
        if !self.smooth.is_animating() {
            return false;
        }
        self.smooth.tick();
        true
    }

    /// Whether anything visible changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn max_scroll_px(&self) -> f64 {
        let rows = self.total_rows().saturating_sub(self.viewport_rows as usize);
        rows as f64 * ROW_PX
    }
}

impl ContentView for TerminalContentView {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.scroll_top,
            scroll_height: self.total_rows() as f64 * ROW_PX,
            client_height: f64::from(self.viewport_rows) * ROW_PX,
        }
    }

    fn scroll_by(&mut self, dy: f64) {
        let next = (self.scroll_top + dy).clamp(0.0, self.max_scroll_px());
        if next != self.scroll_top {
            self.scroll_top = next;
            self.smooth.reset();
            self.dirty = true;
        }
    }

    fn mount(&mut self, tab_id: &str) {
        self.tab_id = Some(tab_id.to_string());
        self.document = None;
        self.scroll_top = 0.0;
        self.smooth.reset();
        self.dirty = true;
    }

    fn headings(&self) -> Vec<HeadingBox> {
        let Some(document) = &self.document else {
            return Vec::new();
        };
        document
            .headings
            .iter()
            .map(|h| HeadingBox {
                id: h.id.clone(),
                level: h.level,
                top: h.row as f64 * ROW_PX,
                height: h.rows.max(1) as f64 * ROW_PX,
            })
            .collect()
    }

    fn scroll_into_view(&mut self, heading_id: &str, behavior: ScrollBehavior) -> bool {
        let Some(row) = self
            .document
            .as_ref()
            .and_then(|d| d.heading(heading_id))
            .map(|h| h.row)
        else {
            return false;
        };

        let from = self.scroll_top;
        self.scroll_top = (row as f64 * ROW_PX).min(self.max_scroll_px());
        match behavior {
            ScrollBehavior::Smooth => self.smooth.jump(from / ROW_PX, self.scroll_top / ROW_PX),
            ScrollBehavior::Instant => self.smooth.reset(),
        }
        self.dirty = true;
        true
    }
}
