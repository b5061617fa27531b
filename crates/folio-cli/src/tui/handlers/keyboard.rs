//! Keyboard event handlers
//!
//! Tab selection, content scrolling, history, and the fragment prompt.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::NavigationSink;
use tracing::debug;

use crate::tui::app::App;
use crate::tui::state::{PromptAction, ROW_PX};

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }
        let code = key_event.code;
        let modifiers = key_event.modifiers;

        // Prompt takes every key while open
        if self.prompt.is_active() {
            match self.prompt.handle_key(code, modifiers) {
                PromptAction::Submit(fragment) => {
                    if !self.location.navigate(&fragment) {
                        debug!(fragment = %fragment, "Already at requested location");
                    }
                }
                PromptAction::Cancel | PromptAction::Continue => {}
            }
            return;
        }

        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_tab_at(index);
            }
            KeyCode::Left | KeyCode::Char('h') => self.select_adjacent_tab(false),
            KeyCode::Right | KeyCode::Char('l') => self.select_adjacent_tab(true),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_content_rows(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_content_rows(1),
            KeyCode::PageUp => self.scroll_content_rows(-self.page_rows()),
            KeyCode::PageDown => self.scroll_content_rows(self.page_rows()),
            KeyCode::Home => self.scroll_content_rows(-(self.view.total_rows() as i32)),
            KeyCode::End => self.scroll_content_rows(self.view.total_rows() as i32),
            KeyCode::Char('g') => {
                let current = self.location.read();
                self.prompt.open(&current);
            }
            KeyCode::Char('[') => {
                self.location.back();
            }
            KeyCode::Char(']') => {
                self.location.forward();
            }
            _ => {}
        }
    }

    fn select_tab_at(&mut self, index: usize) {
        let Some(tab) = self.navigator.tabs().get(index) else {
            return;
        };
        let tab_id = tab.id.clone();
        self.navigator
            .select_tab(&tab_id, Instant::now(), &mut self.view, &mut self.location);
    }

    fn select_adjacent_tab(&mut self, forward: bool) {
        if let Some(index) = self
            .navigator
            .tabs()
            .step(self.navigator.active_index(), forward)
        {
            self.select_tab_at(index);
        }
    }

    /// Row scrolling from the keyboard, through the engine
    fn scroll_content_rows(&mut self, rows: i32) {
        self.navigator
            .scroll_by(f64::from(rows) * ROW_PX, &mut self.view);
    }

    /// Rows moved by PgUp/PgDn: one screen minus a line of overlap
    fn page_rows(&self) -> i32 {
        (i32::from(self.view.viewport_rows()) - 1).max(1)
    }
}
