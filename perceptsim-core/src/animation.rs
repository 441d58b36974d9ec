//! Count-up animation for numeric displays
//!
//! When a metric changes, its on-screen number ramps from the old value to
//! the new one over roughly 500-800 ms. The ramp is purely cosmetic: it reads
//! a finished [`crate::scoring::DerivedMetrics`] value and never writes back.
//!
//! ## Easing
//!
//! Ease-out cubic, fast start and gentle landing:
//!
//! ```text
//! t      = clamp(elapsed / duration, 0, 1)
//! eased  = 1 - (1 - t)³
//! value  = from + (to - from) × eased
//! ```
//!
//! ## Retargeting
//!
//! There is no cancellation. If the configuration changes mid-ramp, the
//! widget calls [`CountUp::retarget`], which starts a fresh ramp from the
//! value currently on screen toward the new target.
//!
//! ```rust
//! use perceptsim_core::animation::CountUp;
//!
//! let ramp = CountUp::new(0.0, 87.5);
//! let frames: Vec<f32> = ramp.frames(100).collect();
//! assert_eq!(*frames.last().unwrap(), 87.5);
//! ```

use crate::{
    constants::animation::{DEFAULT_COUNT_UP_MS, MAX_COUNT_UP_MS, MIN_COUNT_UP_MS},
    time::{FrameClock, Millis},
};

/// A single eased ramp between two display values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    from: f32,
    to: f32,
    duration_ms: u32,
}

impl CountUp {
    /// Ramp with the default duration
    pub fn new(from: f32, to: f32) -> Self {
        Self::with_duration(from, to, DEFAULT_COUNT_UP_MS)
    }

    /// Ramp with an explicit duration, kept within 500-800 ms
    pub fn with_duration(from: f32, to: f32, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.clamp(MIN_COUNT_UP_MS, MAX_COUNT_UP_MS),
        }
    }

    /// Starting value
    pub fn from(&self) -> f32 {
        self.from
    }

    /// Target value
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Ramp length
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Displayed value after `elapsed_ms`
    pub fn value_at(&self, elapsed_ms: u64) -> f32 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let t = elapsed_ms as f32 / self.duration_ms as f32;
        self.from + (self.to - self.from) * ease_out_cubic(t)
    }

    /// Displayed value now, for a ramp started at `started_at`
    pub fn value_now(&self, clock: &impl FrameClock, started_at: Millis) -> f32 {
        self.value_at(clock.since(started_at))
    }

    /// Whether the target has been reached
    pub fn is_finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration_ms as u64
    }

    /// New ramp from the value on screen at `elapsed_ms` toward `to`
    pub fn retarget(&self, to: f32, elapsed_ms: u64) -> Self {
        Self {
            from: self.value_at(elapsed_ms),
            to,
            duration_ms: self.duration_ms,
        }
    }

    /// Lazy frame sequence sampled every `interval_ms`, ending exactly at the target
    pub fn frames(&self, interval_ms: u32) -> Frames {
        Frames {
            ramp: *self,
            interval_ms: interval_ms.max(1) as u64,
            elapsed_ms: 0,
            done: false,
        }
    }
}

/// Iterator over the display values of a [`CountUp`]
#[derive(Debug, Clone)]
pub struct Frames {
    ramp: CountUp,
    interval_ms: u64,
    elapsed_ms: u64,
    done: bool,
}

impl Iterator for Frames {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.done {
            return None;
        }
        let value = self.ramp.value_at(self.elapsed_ms);
        if self.ramp.is_finished(self.elapsed_ms) {
            self.done = true;
        }
        self.elapsed_ms += self.interval_ms;
        Some(value)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::SteppedClock;

    #[test]
    fn endpoints_are_exact() {
        let ramp = CountUp::new(10.0, 90.0);
        assert_eq!(ramp.value_at(0), 10.0);
        assert_eq!(ramp.value_at(600), 90.0);
        assert_eq!(ramp.value_at(10_000), 90.0);
    }

    #[test]
    fn ease_out_is_ahead_of_linear() {
        let ramp = CountUp::new(0.0, 100.0);
        // t = 0.5 → 1 - 0.125 = 0.875
        assert!((ramp.value_at(300) - 87.5).abs() < 1e-3);
    }

    #[test]
    fn frames_are_monotone_and_finite() {
        let ramp = CountUp::with_duration(20.0, 80.0, 700);
        let frames: Vec<f32> = ramp.frames(17).collect();

        assert_eq!(frames.first(), Some(&20.0));
        assert_eq!(frames.last(), Some(&80.0));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(frames.len(), 43); // 0, 17, ..., 714
    }

    #[test]
    fn duration_is_kept_in_range() {
        assert_eq!(CountUp::with_duration(0.0, 1.0, 50).duration_ms(), 500);
        assert_eq!(CountUp::with_duration(0.0, 1.0, 5000).duration_ms(), 800);
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let ramp = CountUp::new(0.0, 100.0);
        let shown = ramp.value_at(300);
        let next = ramp.retarget(40.0, 300);

        assert_eq!(next.from(), shown);
        assert_eq!(next.to(), 40.0);
        assert_eq!(next.value_at(600), 40.0);
    }

    #[test]
    fn clock_driven_value() {
        let ramp = CountUp::new(0.0, 50.0);
        let mut clock = SteppedClock::at(1_000);
        assert_eq!(ramp.value_now(&clock, 1_000), 0.0);

        clock.step(600);
        assert_eq!(ramp.value_now(&clock, 1_000), 50.0);
    }
}
