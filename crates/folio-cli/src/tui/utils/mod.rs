//! Utilities for the TUI
//!
//! Common helper functions used throughout the TUI.

mod text;

pub use text::{truncate_ellipsis, wrap_text};
