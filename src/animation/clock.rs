use std::time::Duration;

use crate::foundation::error::{PolarError, PolarResult};

/// Slowest speed setting of the speed control.
pub const MIN_SPEED: u32 = 2;
/// Fastest speed setting of the speed control.
pub const MAX_SPEED: u32 = 100;
/// Speed setting the control starts at.
pub const DEFAULT_SPEED: u32 = 50;

/// Tick interval for a speed setting: `100 - speed` milliseconds, never below 1 ms.
pub fn interval_for_speed(speed: u32) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    Duration::from_millis(u64::from((100 - speed).max(1)))
}

/// Fixed-interval tick accumulator.
///
/// Callers feed elapsed wall-clock time through [`TickClock::advance`] and get back the number
/// of whole intervals that elapsed; the remainder carries over to the next call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    /// Clock firing every `interval`; zero intervals are rejected.
    pub fn new(interval: Duration) -> PolarResult<Self> {
        if interval.is_zero() {
            return Err(PolarError::validation("tick interval must be > 0"));
        }
        Ok(Self {
            interval,
            accumulated: Duration::ZERO,
        })
    }

    /// Configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time accumulated towards the next tick.
    pub fn pending(&self) -> Duration {
        self.accumulated
    }

    /// Add `dt` without firing anything.
    pub fn accumulate(&mut self, dt: Duration) {
        self.accumulated = self.accumulated.saturating_add(dt);
    }

    /// Whole intervals pending, saturating at `u64::MAX`.
    pub fn due(&self) -> u64 {
        let due = self.accumulated.as_nanos() / self.interval.as_nanos();
        u64::try_from(due).unwrap_or(u64::MAX)
    }

    /// Consume one pending interval. Returns `false` when none is due.
    pub fn take_tick(&mut self) -> bool {
        match self.accumulated.checked_sub(self.interval) {
            Some(rest) => {
                self.accumulated = rest;
                true
            }
            None => false,
        }
    }

    /// Drop whole intervals beyond the first `keep`, keeping the partial remainder.
    ///
    /// Returns the number of dropped intervals, saturating at `u64::MAX`.
    pub fn drop_overdue(&mut self, keep: u64) -> u64 {
        let interval_ns = self.interval.as_nanos();
        let total_ns = self.accumulated.as_nanos();
        let due = total_ns / interval_ns;
        let keep = u128::from(keep);
        if due <= keep {
            return 0;
        }
        self.accumulated = duration_from_nanos(keep * interval_ns + total_ns % interval_ns);
        u64::try_from(due - keep).unwrap_or(u64::MAX)
    }

    /// Add `dt` and consume every due interval; returns how many were due.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        self.accumulate(dt);
        let total_ns = self.accumulated.as_nanos();
        let interval_ns = self.interval.as_nanos();
        let due = self.due();
        self.accumulated = duration_from_nanos(total_ns % interval_ns);
        due
    }

    /// Drop any partial interval.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

fn duration_from_nanos(ns: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(ns / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (ns % NANOS_PER_SEC) as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
