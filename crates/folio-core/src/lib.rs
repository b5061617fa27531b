//! Folio Core - Shared library for the portfolio notebook
//!
//! This crate provides everything the front-ends need that is not drawing:
//! - Tab navigation engine (wheel routing, boundary dwell, hints, fragment sync)
//! - Site content model (tabs, resume records, markdown documents)
//! - Configuration and filesystem paths

pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod nav;
pub mod paths;

// Re-exports for convenience
pub use config::{FolioConfig, NavigationConfig};
pub use content::{Site, TabContent};
pub use error::{FolioError, Result};
pub use nav::{
    ContentView, Direction, Hint, MemoryLocation, NavigationSink, NavigationState, Navigator,
    TabDefinition, TabSet, WheelDecision, WheelEvent, WheelSource,
};
