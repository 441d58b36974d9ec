//! Frame clocks for the count-up animation
//!
//! Only [`crate::animation`] reads a clock; scoring is time-free. A clock
//! reports milliseconds since its own origin, and ramps remember the reading
//! at which they started.
//!
//! - [`MonotonicClock`]: real elapsed time, origin at construction (std only)
//! - [`SteppedClock`]: advanced by hand, for tests and offline frame dumps

/// Milliseconds since a clock's origin
pub type Millis = u64;

/// Millisecond clock driving animation frames
pub trait FrameClock {
    /// Current reading
    fn elapsed_ms(&self) -> Millis;

    /// Time since an earlier reading, zero if `mark` lies in the future
    fn since(&self, mark: Millis) -> Millis {
        self.elapsed_ms().saturating_sub(mark)
    }
}

/// Real clock backed by [`std::time::Instant`]
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Clock whose origin is now
    pub fn start() -> Self {
        Self { origin: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(feature = "std")]
impl FrameClock for MonotonicClock {
    fn elapsed_ms(&self) -> Millis {
        Millis::try_from(self.origin.elapsed().as_millis()).unwrap_or(Millis::MAX)
    }
}

/// Hand-driven clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SteppedClock {
    now: Millis,
}

impl SteppedClock {
    /// Clock reading `now`
    pub fn at(now: Millis) -> Self {
        Self { now }
    }

    /// Move forward by `ms`
    pub fn step(&mut self, ms: Millis) {
        self.now = self.now.saturating_add(ms);
    }

    /// Jump to any reading, including an earlier one
    pub fn jump_to(&mut self, now: Millis) {
        self.now = now;
    }
}

impl FrameClock for SteppedClock {
    fn elapsed_ms(&self) -> Millis {
        self.now
    }
}
