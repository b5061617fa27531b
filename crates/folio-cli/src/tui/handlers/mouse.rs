//! Mouse event handling
//!
//! Wheel input is routed through the navigation engine: inside the page it
//! is inner, anywhere else outer. Left clicks on the tab strip select tabs.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use folio_core::nav::{WheelAction, WheelEvent, WheelSource};
use folio_core::ContentView;
use tracing::debug;

use crate::tui::app::App;
use crate::tui::state::{ROW_PX, WHEEL_NOTCH_ROWS};

impl App {
    /// Handle mouse events for scrolling and tab clicks
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.handle_wheel(mouse.column, mouse.row, WHEEL_NOTCH_ROWS * ROW_PX);
            }
            MouseEventKind::ScrollUp => {
                self.handle_wheel(mouse.column, mouse.row, -WHEEL_NOTCH_ROWS * ROW_PX);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    /// One wheel notch at a screen position
    fn handle_wheel(&mut self, x: u16, y: u16, delta_y: f64) {
        if self.prompt.is_active() {
            return;
        }

        let source = if self.layout.is_inside_content(x, y) {
            WheelSource::Inner
        } else {
            WheelSource::Outer
        };
        let decision = self.navigator.handle_wheel(
            source,
            WheelEvent::pixels(delta_y),
            Instant::now(),
            &mut self.view,
            &mut self.location,
        );

        // Unconsumed events get the pane's own scrolling
        if !decision.consumed {
            self.view.scroll_by(delta_y);
        }

        if let WheelAction::SwitchTab { from, to } = decision.action {
            debug!(from, to, ?source, "Wheel switched tab");
        }
    }

    fn handle_left_click(&mut self, x: u16, y: u16) {
        if self.prompt.is_active() {
            return;
        }
        if self.layout.is_on_scrollbar(x, y) {
            self.handle_scrollbar_click(y);
            return;
        }
        let Some(index) = self.layout.tab_at(x, y) else {
            return;
        };
        let tab_id = self.navigator.tabs()[index].id.clone();
        if self
            .navigator
            .select_tab(&tab_id, Instant::now(), &mut self.view, &mut self.location)
        {
            self.needs_redraw = true;
        }
    }

    /// Jump the page to the position clicked on the scrollbar track
    fn handle_scrollbar_click(&mut self, y: u16) {
        let Some(track) = self.layout.content_scrollbar_area else {
            return;
        };
        let total = self.view.total_rows();
        let visible = self.view.viewport_rows() as usize;
        if total <= visible || track.height == 0 {
            return;
        }
        let ratio = f64::from(y.saturating_sub(track.y)) / f64::from(track.height);
        let target = (ratio * total as f64) as usize;
        let first_row = target.saturating_sub(visible / 2);
        let dy = first_row as f64 * ROW_PX - self.view.metrics().scroll_top;
        self.navigator.scroll_by(dy, &mut self.view);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use folio_core::content::{ContentTab, ResumeData};
    use folio_core::{FolioConfig, NavigationSink, Site};
    use ratatui::layout::Rect;
    use ratatui::text::Line;
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::tui::markdown::RenderedDocument;

    fn app() -> App {
        let site = Site::assemble(
            ResumeData::default(),
            vec![
                ContentTab::new("about", "About", "# About\n"),
                ContentTab::new("career", "Career", "# Career\n"),
            ],
            None,
        )
        .unwrap();
        let mut app = App::new(site, &FolioConfig::default(), "", None).unwrap();
        app.navigator
            .restore(Instant::now(), &mut app.view, &mut app.location);
        app.navigator
            .tick(Instant::now(), &mut app.view, &mut app.location);
        app.layout.content_area = Some(Rect::new(0, 3, 40, 20));
        app.layout.tab_hits = vec![
            (Rect::new(0, 0, 5, 3), 0),
            (Rect::new(6, 0, 9, 3), 1),
            (Rect::new(16, 0, 10, 3), 2),
        ];
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_selects_tab() {
        let mut app = app();
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 8, 1));
        assert_eq!(app.navigator.active_tab().id, "about");
        assert_eq!(app.location.read(), "about");
    }

    #[test]
    fn test_outer_wheel_switches_tab() {
        let mut app = app();
        app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 60, 10));
        assert_eq!(app.navigator.active_tab().id, "about");
    }

    #[test]
    fn test_scrollbar_click_jumps_and_clears_hint() {
        let mut app = app();
        app.view
            .lay_out(Arc::new(RenderedDocument::new(vec![Line::from("text"); 100])), 20);
        app.layout.content_scrollbar_area = Some(Rect::new(39, 3, 1, 20));
        app.view.scroll_by(100.0 * ROW_PX);

        let t0 = Instant::now() + Duration::from_secs(1);
        app.navigator.handle_wheel(
            WheelSource::Inner,
            WheelEvent::pixels(WHEEL_NOTCH_ROWS * ROW_PX),
            t0,
            &mut app.view,
            &mut app.location,
        );
        app.navigator.tick(t0, &mut app.view, &mut app.location);
        assert!(app.navigator.hint().is_some());

        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 39, 3));
        assert_eq!(app.view.first_visible_row(), 0);
        assert!(app.navigator.hint().is_none());
        assert!(app.navigator.session().boundary_reached_at().is_none());
        assert_eq!(app.navigator.active_tab().id, "home");
    }

    #[test]
    fn test_wheel_ignored_while_prompting() {
        let mut app = app();
        app.prompt.open("");
        app.handle_mouse_event(mouse(MouseEventKind::ScrollDown, 60, 10));
        assert_eq!(app.navigator.active_tab().id, "home");
    }
}
