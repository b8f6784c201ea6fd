//! Monotonic clocks used to time a child process.
//!
//! Two readings bracket every run: a coarse millisecond clock and a
//! high-resolution tick counter with a queried frequency. Both sit behind
//! traits so the runner can be driven by scripted clocks in tests.

use std::time::Instant;

/// Microseconds per second.
pub const MICROS_PER_SECOND: u64 = 1_000_000;

/// Tick frequency of [`PerformanceCounter`].
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// A monotonic millisecond clock.
pub trait CoarseClock {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> u64;
}

/// A monotonic tick counter.
pub trait HighResClock {
    /// Ticks per second.
    fn frequency(&self) -> u64;

    /// Ticks since an arbitrary fixed origin.
    fn ticks(&self) -> u64;
}

/// Coarse clock counting whole milliseconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl CoarseClock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// High-resolution counter ticking in nanoseconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct PerformanceCounter {
    origin: Instant,
}

impl PerformanceCounter {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for PerformanceCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl HighResClock for PerformanceCounter {
    fn frequency(&self) -> u64 {
        NANOS_PER_SECOND
    }

    fn ticks(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Convert a tick delta to whole microseconds.
///
/// Multiplies before dividing and truncates. A counter that appears to run
/// backwards yields zero, as does a zero frequency.
pub fn micros_between(start_ticks: u64, end_ticks: u64, frequency: u64) -> u64 {
    if frequency == 0 {
        return 0;
    }
    let delta = u128::from(end_ticks.saturating_sub(start_ticks));
    let micros = delta * u128::from(MICROS_PER_SECOND) / u128::from(frequency);
    u64::try_from(micros).unwrap_or(u64::MAX)
}
