//! Row-level smooth scroll with exponential ease-out
//!
//! A jump moves the logical position at once; the drawn position starts
//! at the old rows and decays toward the new ones, a few rows per frame.

/// Damping applied per frame: `offset *= 1 - SPEED`
const DEFAULT_SPEED: f64 = 0.35;

/// Displacements smaller than this are snapped to zero
const SETTLE_ROWS: f64 = 0.4;

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Drawn rows minus logical rows. Positive = drawn below the target.
    row_offset: f64,
    speed: f64,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            row_offset: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// The logical position jumped from `from` to `to` rows
    pub fn jump(&mut self, from: f64, to: f64) {
        self.row_offset += from - to;
    }

    /// Decay the displacement. Call once per frame.
    pub fn tick(&mut self) {
        self.row_offset *= 1.0 - self.speed;
        if self.row_offset.abs() < SETTLE_ROWS {
            self.row_offset = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.row_offset = 0.0;
    }

    /// Current displacement in whole rows
    pub fn row_offset(&self) -> i64 {
        self.row_offset.round() as i64
    }

    pub fn is_animating(&self) -> bool {
        self.row_offset != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_starts_at_old_position_and_settles() {
        let mut smooth = SmoothScroll::default();
        smooth.jump(0.0, 30.0);
        assert_eq!(smooth.row_offset(), -30);

        let mut frames = 0;
        while smooth.is_animating() {
            smooth.tick();
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(smooth.row_offset(), 0);
        assert!(frames > 1);
    }

    #[test]
    fn test_reset_stops_motion() {
        let mut smooth = SmoothScroll::default();
        smooth.jump(40.0, 10.0);
        smooth.reset();
        assert!(!smooth.is_animating());
    }
}
