//! Wheel events and the outer wheel-to-tab translator

/// Unit of a wheel delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// One wheel tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f64,
    pub mode: DeltaMode,
}

impl WheelEvent {
    pub fn pixels(delta_y: f64) -> Self {
        Self {
            delta_y,
            mode: DeltaMode::Pixel,
        }
    }

    pub fn lines(delta_y: f64) -> Self {
        Self {
            delta_y,
            mode: DeltaMode::Line,
        }
    }

    /// Delta in pixels for a container of `client_height`
    pub fn normalized(&self, line_height: f64, client_height: f64) -> f64 {
        match self.mode {
            DeltaMode::Pixel => self.delta_y,
            DeltaMode::Line => self.delta_y * line_height,
            DeltaMode::Page => self.delta_y * client_height,
        }
    }
}

/// Where the wheel event happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelSource {
    /// Inside the scrollable content pane
    Inner,
    /// Anywhere else in the notebook
    Outer,
}

/// What the engine did with a wheel event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelAction {
    /// Nothing (ignored, absorbed, or guarded)
    None,
    /// Left to the host's native handling
    Native,
    /// Content scrolled manually by this many units
    Scroll(f64),
    /// Active tab changed
    SwitchTab { from: usize, to: usize },
}

/// Result of routing one wheel event.
///
/// `consumed` means the engine owns the event's default action and the host
/// must not scroll natively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDecision {
    pub consumed: bool,
    pub action: WheelAction,
}

impl WheelDecision {
    pub(crate) fn consumed(action: WheelAction) -> Self {
        Self {
            consumed: true,
            action,
        }
    }

    pub(crate) fn native(action: WheelAction) -> Self {
        Self {
            consumed: false,
            action,
        }
    }

    pub fn switched_tab(&self) -> bool {
        matches!(self.action, WheelAction::SwitchTab { .. })
    }
}

/// Steps the active tab from wheel input outside the content pane.
///
/// Small deltas are jitter; after a step the translator cools down so one
/// gesture moves at most one tab.
#[derive(Debug)]
pub struct WheelToTab {
    threshold: f64,
    cooling_down: bool,
}

impl WheelToTab {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            cooling_down: false,
        }
    }

    /// Whether an event with raw `delta_y` qualifies for a tab step at all
    pub fn accepts(&self, delta_y: f64) -> bool {
        !self.cooling_down && delta_y.abs() >= self.threshold
    }

    pub fn start_cooldown(&mut self) {
        self.cooling_down = true;
    }

    pub fn end_cooldown(&mut self) {
        self.cooling_down = false;
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooling_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_per_mode() {
        assert_eq!(WheelEvent::pixels(53.0).normalized(40.0, 600.0), 53.0);
        assert_eq!(WheelEvent::lines(3.0).normalized(40.0, 600.0), 120.0);
        let page = WheelEvent {
            delta_y: -1.0,
            mode: DeltaMode::Page,
        };
        assert_eq!(page.normalized(40.0, 600.0), -600.0);
    }

    #[test]
    fn test_threshold_and_cooldown() {
        let mut translator = WheelToTab::new(10.0);
        assert!(!translator.accepts(9.9));
        assert!(!translator.accepts(-5.0));
        assert!(translator.accepts(10.0));
        assert!(translator.accepts(-50.0));
        translator.start_cooldown();
        assert!(!translator.accepts(100.0));
        translator.end_cooldown();
        assert!(translator.accepts(100.0));
    }
}
