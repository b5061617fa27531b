//! Main TUI application
//!
//! Core application state and event loop.
//! Handler implementations are in the handlers/ module.

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::warn;

use folio_core::{FolioConfig, MemoryLocation, NavigationSink, NavigationState, Navigator, Site};

use crate::tui::markdown::DocumentCache;
use crate::tui::state::{save_location, FragmentPrompt, LayoutState, TerminalContentView};
use crate::tui::themes::Theme;

/// Redraw interval while anything is moving
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Application state
pub struct App {
    pub site: Site,
    pub navigator: Navigator,
    /// Content pane the engine scrolls and observes
    pub view: TerminalContentView,
    /// The notebook's "address bar": current fragment plus history
    pub location: MemoryLocation,
    pub documents: DocumentCache,
    pub layout: LayoutState,
    pub prompt: FragmentPrompt,
    pub theme: Theme,
    /// Where the last location is persisted on quit; `None` disables it
    pub location_file: Option<PathBuf>,
    pub needs_redraw: bool,
    pub should_quit: bool,

    // Change tracking between loop iterations
    last_state: NavigationState,
    last_location: String,
}

impl App {
    pub fn new(
        site: Site,
        config: &FolioConfig,
        initial_fragment: &str,
        location_file: Option<PathBuf>,
    ) -> Result<Self> {
        let default_tab = if site.tabs.contains(&config.default_tab) {
            config.default_tab.clone()
        } else {
            let first = site.tabs[0].id.clone();
            warn!(
                configured = %config.default_tab,
                fallback = %first,
                "Configured default tab does not exist"
            );
            first
        };

        let navigator = Navigator::new(
            site.tabs.clone(),
            &default_tab,
            config.navigation.clone(),
            Instant::now(),
        )
        .context("Failed to create navigator")?;
        let location = MemoryLocation::new(initial_fragment);

        Ok(Self {
            last_state: navigator.state(),
            last_location: location.read(),
            site,
            navigator,
            view: TerminalContentView::new(),
            location,
            documents: DocumentCache::new(),
            layout: LayoutState::new(),
            prompt: FragmentPrompt::new(),
            theme: Theme::notebook(),
            location_file,
            needs_redraw: true,
            should_quit: false,
        })
    }

    /// Run the TUI until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.navigator
            .restore(Instant::now(), &mut self.view, &mut self.location);
        self.sync_change_tracking();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        self.navigator.teardown();
        self.persist_location();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            // Fire engine timers and pick up history navigation
            self.navigator
                .tick(Instant::now(), &mut self.view, &mut self.location);

            if self.view.tick_animation() {
                self.needs_redraw = true;
            }
            if self.view.take_dirty() {
                self.needs_redraw = true;
            }
            if self.sync_change_tracking() {
                self.needs_redraw = true;
            }

            // A heading scroll waits on frames, so keep producing them
            if self.navigator.sync().has_pending_scroll() || self.view.document().is_none() {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
                self.navigator.on_frame(&mut self.view, &mut self.location);
            }

            let poll_timeout = self
                .navigator
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .map_or(FRAME_INTERVAL, |until| until.min(FRAME_INTERVAL));

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) => {
                                self.handle_key(key);
                                self.needs_redraw = true;
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse_event(mouse);
                            }
                            Event::Resize(_, _) => {
                                self.needs_redraw = true;
                            }
                            _ => {}
                        }
                    }
                }
                _ = tokio::time::sleep(poll_timeout) => {}
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Record the visible state and location; true when either changed
    fn sync_change_tracking(&mut self) -> bool {
        let mut changed = false;

        let state = self.navigator.state();
        if state != self.last_state {
            self.last_state = state;
            changed = true;
        }

        let location = self.location.read();
        if location != self.last_location {
            self.last_location = location;
            changed = true;
        }

        changed
    }

    fn persist_location(&self) {
        let Some(path) = &self.location_file else {
            return;
        };
        if let Err(e) = save_location(path, &self.location.read()) {
            warn!("Failed to save location: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::{ContentTab, ResumeData};

    fn site() -> Site {
        Site::assemble(
            ResumeData::default(),
            vec![
                ContentTab::new("about", "About", "# About\n\nHello."),
                ContentTab::new("career", "Career", "# Career\n\n## First Job\n"),
            ],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_unknown_default_tab_falls_back_to_first() {
        let config = FolioConfig {
            default_tab: "missing".into(),
            ..FolioConfig::default()
        };
        let app = App::new(site(), &config, "", None).unwrap();
        assert_eq!(app.navigator.active_tab().id, "home");
    }

    #[test]
    fn test_initial_fragment_seeds_location() {
        let app = App::new(site(), &FolioConfig::default(), "#career/first-job", None).unwrap();
        assert_eq!(app.location.read(), "career/first-job");
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_persists_location_on_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("location");
        let app = App::new(site(), &FolioConfig::default(), "#about", Some(path.clone())).unwrap();
        app.persist_location();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "about");
    }
}
