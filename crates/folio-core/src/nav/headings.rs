//! Heading visibility observer
//!
//! Tracks which headings intersect the reading zone (the top slice of the
//! content pane) and reports the topmost heading that newly entered it,
//! mirroring what an intersection observer delivers: only elements whose
//! state changed take part in a report.

use std::collections::BTreeSet;

use super::boundary::ScrollMetrics;

/// Laid-out heading in content coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingBox {
    pub id: String,
    pub level: u8,
    pub top: f64,
    pub height: f64,
}

impl HeadingBox {
    fn is_observable(&self) -> bool {
        (1..=3).contains(&self.level) && !self.id.is_empty()
    }

    fn intersects(&self, zone_top: f64, zone_bottom: f64) -> bool {
        self.top < zone_bottom && self.top + self.height > zone_top
    }
}

#[derive(Debug)]
pub struct HeadingVisibilityObserver {
    zone_ratio: f64,
    subscribed: bool,
    intersecting: BTreeSet<String>,
}

impl HeadingVisibilityObserver {
    pub fn new(zone_ratio: f64) -> Self {
        Self {
            zone_ratio,
            subscribed: false,
            intersecting: BTreeSet::new(),
        }
    }

    /// Start observing the currently mounted headings. The first
    /// evaluation afterwards reports every heading already in the zone.
    pub fn subscribe(&mut self) {
        self.subscribed = true;
        self.intersecting.clear();
    }

    pub fn disconnect(&mut self) {
        self.subscribed = false;
        self.intersecting.clear();
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Recompute intersections; returns the topmost heading that entered
    /// the reading zone since the last evaluation.
    pub fn evaluate(&mut self, metrics: ScrollMetrics, headings: &[HeadingBox]) -> Option<String> {
        if !self.subscribed {
            return None;
        }

        let zone_top = metrics.scroll_top;
        let zone_bottom = zone_top + metrics.client_height * self.zone_ratio;

        let mut now_intersecting = BTreeSet::new();
        let mut entered: Option<&HeadingBox> = None;
        for heading in headings.iter().filter(|h| h.is_observable()) {
            if !heading.intersects(zone_top, zone_bottom) {
                continue;
            }
            now_intersecting.insert(heading.id.clone());
            if !self.intersecting.contains(&heading.id)
                && entered.is_none_or(|best| heading.top < best.top)
            {
                entered = Some(heading);
            }
        }

        let entered = entered.map(|h| h.id.clone());
        self.intersecting = now_intersecting;
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(id: &str, level: u8, top: f64) -> HeadingBox {
        HeadingBox {
            id: id.to_string(),
            level,
            top,
            height: 16.0,
        }
    }

    fn at(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height: 2000.0,
            client_height: 500.0,
        }
    }

    fn page() -> Vec<HeadingBox> {
        vec![
            heading("intro", 1, 0.0),
            heading("details", 2, 50.0),
            heading("deep", 4, 60.0),
            heading("", 2, 70.0),
            heading("later", 2, 400.0),
            heading("end", 3, 900.0),
        ]
    }

    #[test]
    fn test_unsubscribed_reports_nothing() {
        let mut observer = HeadingVisibilityObserver::new(0.2);
        assert_eq!(observer.evaluate(at(0.0), &page()), None);
    }

    #[test]
    fn test_initial_report_is_topmost_in_zone() {
        let mut observer = HeadingVisibilityObserver::new(0.2);
        observer.subscribe();
        // Zone is [0, 100): intro and details intersect, "later" does not.
        assert_eq!(observer.evaluate(at(0.0), &page()), Some("intro".to_string()));
        // Nothing changed, nothing reported.
        assert_eq!(observer.evaluate(at(0.0), &page()), None);
    }

    #[test]
    fn test_scrolling_reports_entering_heading() {
        let mut observer = HeadingVisibilityObserver::new(0.2);
        observer.subscribe();
        observer.evaluate(at(0.0), &page());
        assert_eq!(observer.evaluate(at(380.0), &page()), Some("later".to_string()));
        assert_eq!(observer.evaluate(at(850.0), &page()), Some("end".to_string()));
        // Scrolling back up re-enters "later".
        assert_eq!(observer.evaluate(at(390.0), &page()), Some("later".to_string()));
    }

    #[test]
    fn test_ignores_deep_levels_and_missing_ids() {
        let mut observer = HeadingVisibilityObserver::new(0.2);
        observer.subscribe();
        let only_unobservable = vec![heading("deep", 4, 0.0), heading("", 1, 0.0)];
        assert_eq!(observer.evaluate(at(0.0), &only_unobservable), None);
    }

    #[test]
    fn test_disconnect_forgets_state() {
        let mut observer = HeadingVisibilityObserver::new(0.2);
        observer.subscribe();
        observer.evaluate(at(0.0), &page());
        observer.disconnect();
        assert!(!observer.is_subscribed());
        observer.subscribe();
        assert_eq!(observer.evaluate(at(0.0), &page()), Some("intro".to_string()));
    }
}
