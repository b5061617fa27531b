//! Notebook color theme
//!
//! A single fixed palette: kraft paper page, dark ink, and one accent color
//! per tab. Tabs carry abstract color tokens; this module maps them.

use folio_core::nav::ColorToken;
use ratatui::style::Color;

use folio_core::constants::content::PALETTE_SIZE;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Page background
    pub bg_color: Color,
    /// Sidebar background
    pub sidebar_bg_color: Color,
    /// Primary text
    pub text_color: Color,
    /// Body text
    pub secondary_color: Color,
    /// De-emphasized text
    pub dim_color: Color,
    /// Sidebar name
    pub sidebar_name_color: Color,
    /// Sidebar text
    pub sidebar_text_color: Color,
    /// Inline code background and link buttons
    pub kraft_light_color: Color,
    /// Rules and decorative borders
    pub border_color: Color,
    /// Status bar background
    pub status_bar_bg_color: Color,
    /// Scrollbar track
    pub scrollbar_bg_color: Color,
    /// Text drawn on a colored tab
    pub tab_text_color: Color,
    pub home_color: Color,
    pub settings_color: Color,
    pub palette: [Color; PALETTE_SIZE as usize],
}

impl Default for Theme {
    fn default() -> Self {
        Self::notebook()
    }
}

impl Theme {
    pub fn notebook() -> Self {
        Self {
            bg_color: Color::Rgb(0xf5, 0xef, 0xe3),
            sidebar_bg_color: Color::Rgb(0x5c, 0x4a, 0x3a),
            text_color: Color::Rgb(0x2f, 0x27, 0x1f),
            secondary_color: Color::Rgb(0x4a, 0x40, 0x36),
            dim_color: Color::Rgb(0x8a, 0x7d, 0x6d),
            sidebar_name_color: Color::Rgb(0xfa, 0xf3, 0xe6),
            sidebar_text_color: Color::Rgb(0xe4, 0xd6, 0xc0),
            kraft_light_color: Color::Rgb(0xe6, 0xd5, 0xb8),
            border_color: Color::Rgb(0xc8, 0xb4, 0x96),
            status_bar_bg_color: Color::Rgb(0xe9, 0xdf, 0xcd),
            scrollbar_bg_color: Color::Rgb(0xe2, 0xd6, 0xc2),
            tab_text_color: Color::Rgb(0xfd, 0xfa, 0xf4),
            home_color: Color::Rgb(0x8b, 0x6b, 0x4a),
            settings_color: Color::Rgb(0x6b, 0x6b, 0x6b),
            palette: [
                Color::Rgb(0xc0, 0x6c, 0x5a),
                Color::Rgb(0xd4, 0x9a, 0x4a),
                Color::Rgb(0x6f, 0x9a, 0x6a),
                Color::Rgb(0x5a, 0x86, 0xa8),
                Color::Rgb(0x8e, 0x6f, 0xa8),
            ],
        }
    }

    /// Concrete color for a tab's color token
    pub fn tab_color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Home => self.home_color,
            ColorToken::Settings => self.settings_color,
            ColorToken::Palette(slot) => self.palette[slot as usize % self.palette.len()],
        }
    }
}
