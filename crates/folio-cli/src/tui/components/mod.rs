//! UI components for the notebook
//!
//! Reusable rendering components: tab strip, profile sidebar, cover page,
//! hint overlay, scrollbar, status bar, and the fragment prompt.

pub mod cover;
pub mod hint;
pub mod scrollbars;
pub mod sidebar;
pub mod status_bar;
pub mod tab_strip;

pub use cover::render_cover;
pub use hint::render_hint;
pub use scrollbars::render_content_scrollbar;
pub use sidebar::{render_sidebar, SIDEBAR_WIDTH, MIN_WIDTH_FOR_SIDEBAR};
pub use status_bar::{render_prompt, render_status_bar};
pub use tab_strip::{render_tab_strip, TAB_STRIP_HEIGHT};
