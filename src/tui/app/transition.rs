//! Page slide animation
//!
//! A forward turn slides the old row out to the left while the new row enters
//! from the right; a backward turn mirrors it. Offsets are pure functions of
//! elapsed time so rendering and tests agree.

use std::time::{Duration, Instant};

use crate::pager::{PageTurn, TurnDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub turn: PageTurn,
    started: Instant,
    duration: Duration,
}

impl Transition {
    pub fn new(turn: PageTurn, duration: Duration) -> Self {
        Self::starting_at(turn, duration, Instant::now())
    }

    pub fn starting_at(turn: PageTurn, duration: Duration, started: Instant) -> Self {
        Self {
            turn,
            started,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Horizontal offsets of the outgoing and incoming rows for a row `width`
    /// cells wide
    pub fn offsets(&self, now: Instant, width: u16) -> (i32, i32) {
        let width = i32::from(width);
        let travelled = (ease_in_out(self.progress(now)) * f64::from(width)).round() as i32;
        match self.turn.direction {
            TurnDirection::Forward => (-travelled, width - travelled),
            TurnDirection::Backward => (travelled, travelled - width),
        }
    }
}

/// Cubic ease-in-out, matching a tween's default curve closely enough for cells
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
