//! Event and rendering handlers
//!
//! Each submodule adds an `impl App` block for one concern.

mod keyboard;
mod mouse;
mod rendering;
