//! Terminal User Interface for Folio

pub mod app;
pub mod components;
pub mod handlers;
pub mod markdown;
pub mod state;
pub mod themes;
pub mod utils;

// Re-exports
pub use app::App;
