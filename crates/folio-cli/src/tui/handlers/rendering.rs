//! UI rendering coordinator
//!
//! Lays out the notebook (sidebar, tab strip, page, status bar), lays the
//! active document out into the content view, then draws each component.

use folio_core::{NavigationSink, TabContent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::components::{
    render_content_scrollbar, render_cover, render_hint, render_prompt, render_sidebar,
    render_status_bar, render_tab_strip, MIN_WIDTH_FOR_SIDEBAR, SIDEBAR_WIDTH, TAB_STRIP_HEIGHT,
};
use crate::tui::markdown::{render_markdown, RenderedDocument};

/// Columns between the page edge and its text
const PAGE_PADDING_X: u16 = 2;

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, area);

        // Sidebar only when there is room for it
        let (sidebar_area, main_area) = if area.width >= MIN_WIDTH_FOR_SIDEBAR {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
                .split(area);
            (Some(cols[0]), cols[1])
        } else {
            (None, area)
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TAB_STRIP_HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(main_area);
        let (tab_strip_area, page_area, status_area) = (rows[0], rows[1], rows[2]);

        let page_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(1)])
            .split(page_area);
        let scrollbar_area = page_cols[1];
        let text_area = page_cols[0].inner(Margin::new(PAGE_PADDING_X, 1));

        self.layout.sidebar_area = sidebar_area;
        self.layout.content_area = Some(page_area);
        self.layout.content_scrollbar_area = Some(Rect::new(
            scrollbar_area.x,
            text_area.y,
            scrollbar_area.width,
            text_area.height,
        ));

        self.lay_out_active_document(text_area);

        if let Some(area) = sidebar_area {
            render_sidebar(f, area, &self.site.resume.profile, &self.theme);
        }

        let active = self.navigator.active_index();
        self.layout.tab_hits =
            render_tab_strip(f, tab_strip_area, self.navigator.tabs(), active, &self.theme);

        let tab = self.navigator.active_tab();
        let accent = self.theme.tab_color(tab.color);
        self.render_page(f, page_area, text_area, scrollbar_area, accent);

        if let Some(hint) = self.navigator.hint() {
            render_hint(f, page_area, hint, &self.theme);
        }

        if self.prompt.is_active() {
            render_prompt(f, status_area, &self.theme, self.prompt.input());
        } else {
            render_status_bar(
                f,
                status_area,
                &self.theme,
                &self.location.read(),
                tab.display_name(),
                accent,
            );
        }
    }

    /// Render (or reuse) the mounted tab's document for this width
    fn lay_out_active_document(&mut self, text_area: Rect) {
        let Some(tab_id) = self.view.tab_id().map(str::to_string) else {
            return;
        };
        let width = text_area.width;
        self.documents.check_width(width);

        let site = &self.site;
        let theme = &self.theme;
        let accent = site
            .tabs
            .index_of(&tab_id)
            .map(|i| theme.tab_color(site.tabs[i].color))
            .unwrap_or(theme.text_color);
        let document = self
            .documents
            .get_or_render(&tab_id, width, || match site.content(&tab_id) {
                Some(TabContent::Markdown(text)) => {
                    render_markdown(text, width as usize, accent, theme)
                }
                Some(TabContent::Cover) => render_cover(&site.resume.profile, width, accent, theme),
                None => RenderedDocument::default(),
            });
        self.view.lay_out(document, text_area.height);
    }

    fn render_page(
        &self,
        f: &mut Frame,
        page_area: Rect,
        text_area: Rect,
        scrollbar_area: Rect,
        accent: Color,
    ) {
        // Top edge of the page in the active tab's color joins it to the strip
        if page_area.height > 0 {
            let edge = Rect::new(page_area.x, page_area.y, page_area.width, 1);
            f.buffer_mut().set_style(edge, Style::default().bg(accent));
        }

        let Some(document) = self.view.document() else {
            return;
        };
        let first = self.view.first_visible_row();
        let visible = text_area.height as usize;
        let lines: Vec<Line<'static>> = document
            .lines
            .iter()
            .skip(first)
            .take(visible)
            .cloned()
            .collect();
        f.render_widget(
            Paragraph::new(lines).style(
                Style::default()
                    .fg(self.theme.text_color)
                    .bg(self.theme.bg_color),
            ),
            text_area,
        );

        render_content_scrollbar(
            f,
            Rect::new(
                scrollbar_area.x,
                text_area.y,
                scrollbar_area.width,
                text_area.height,
            ),
            first,
            document.height(),
            visible,
            accent,
            &self.theme,
        );
    }
}
