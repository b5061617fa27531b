//! Tab navigation and scroll synchronization engine
//!
//! Unifies wheel input, tab switching, boundary detection, transient hints,
//! and location-fragment sync. Nothing in here reads a clock or touches a
//! terminal: time arrives as `now: Instant`, and the location and content
//! pane are injected through [`NavigationSink`] and [`ContentView`].

mod boundary;
mod fragment;
mod guard;
mod hash_sync;
mod headings;
mod hint;
mod navigator;
mod session;
mod sink;
mod tabs;
mod timers;
mod view;
mod wheel;


pub use boundary::{BoundaryDetector, BoundaryOutcome, ScrollMetrics};
pub use fragment::{decode, encode, Fragment, FragmentError};
pub use guard::TabSwitchGuard;
pub use hash_sync::{HashSynchronizer, SyncPhase};
pub use headings::{HeadingBox, HeadingVisibilityObserver};
pub use hint::{Direction, Hint, HintPresenter};
pub use navigator::{NavigationState, Navigator};
pub use session::ScrollSession;
pub use sink::{MemoryLocation, NavigationSink};
pub use tabs::{ColorToken, TabDefinition, TabIcon, TabSet};
pub use timers::{TimerKey, Timers};
pub use view::{ContentView, ScrollBehavior};
pub use wheel::{DeltaMode, WheelAction, WheelDecision, WheelEvent, WheelSource, WheelToTab};
