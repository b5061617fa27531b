//! App State Components
//!
//! Centralized state management for the TUI.
//! Groups related state into logical modules.

mod content;
mod layout;
mod location;
mod prompt;
mod scroll;

pub use content::{TerminalContentView, ROW_PX, WHEEL_NOTCH_ROWS};
pub use layout::LayoutState;
pub use location::{load_saved_location, save_location};
pub use prompt::{FragmentPrompt, PromptAction};
