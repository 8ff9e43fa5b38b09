// SPDX-License-Identifier: MPL-2.0
//! One-shot countdown for transient UI surfaces.
//!
//! The announcement overlay and the post-submit celebration both live for
//! a fixed delay and then disappear. A `Countdown` records the start
//! instant and the delay; expiry is evaluated against monotonic time on
//! each tick, so a countdown whose owner is dropped simply stops being
//! polled instead of firing into torn-down state.

use std::time::{Duration, Instant};

/// A running one-shot countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    started_at: Instant,
    duration: Duration,
}

impl Countdown {
    /// Starts a countdown lasting `duration` from now.
    #[must_use]
    pub fn start(duration: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            duration,
        }
    }

    /// Returns the elapsed time since the countdown started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Returns true once the delay has fully elapsed.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.duration
    }

    /// Fraction of the delay already elapsed, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}
