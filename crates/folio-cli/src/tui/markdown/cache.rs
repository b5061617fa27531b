//! Document Cache
//!
//! Caches rendered tab documents to avoid re-rendering on every frame.

use std::collections::HashMap;
use std::sync::Arc;

use super::RenderedDocument;

/// Cache key: (tab_id, wrap_width)
type CacheKey = (String, u16);

/// Rendered documents by tab and width
#[derive(Debug, Default)]
pub struct DocumentCache {
    cache: HashMap<CacheKey, Arc<RenderedDocument>>,
    /// Last render width to track changes
    last_width: u16,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop entries rendered for another width once the pane is resized.
    /// Returns true when the width changed.
    pub fn check_width(&mut self, width: u16) -> bool {
        let changed = self.last_width != width;
        if changed {
            self.cache.retain(|(_, w), _| *w == width);
            self.last_width = width;
        }
        changed
    }

    /// Get the cached document, rendering it with `render` on a miss
    pub fn get_or_render(
        &mut self,
        tab_id: &str,
        width: u16,
        render: impl FnOnce() -> RenderedDocument,
    ) -> Arc<RenderedDocument> {
        let key = (tab_id.to_string(), width);
        Arc::clone(
            self.cache
                .entry(key)
                .or_insert_with(|| Arc::new(render())),
        )
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    fn doc(rows: usize) -> RenderedDocument {
        RenderedDocument::new(vec![Line::from("x"); rows])
    }

    #[test]
    fn test_renders_once_per_key() {
        let mut cache = DocumentCache::new();
        let mut renders = 0;
        cache.get_or_render("about", 40, || {
            renders += 1;
            doc(3)
        });
        let again = cache.get_or_render("about", 40, || {
            renders += 1;
            doc(5)
        });
        assert_eq!(renders, 1);
        assert_eq!(again.height(), 3);
    }

    #[test]
    fn test_resize_drops_other_widths() {
        let mut cache = DocumentCache::new();
        cache.check_width(40);
        cache.get_or_render("about", 40, || doc(1));
        cache.get_or_render("career", 40, || doc(1));
        assert_eq!(cache.len(), 2);
        assert!(cache.check_width(60));
        assert!(cache.is_empty());
        assert!(!cache.check_width(60));
    }
}
