//! Time management utilities

use std::time::Instant;

/// Default upper bound on a single frame's delta time, in seconds
pub const DEFAULT_MAX_DELTA: f32 = 1.0;

/// Monotonic time source
pub trait Clock {
    /// Seconds since an arbitrary fixed origin; never decreases
    fn now_seconds(&self) -> f64;
}

/// Wall clock backed by [`Instant`]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    /// Create a clock whose origin is now
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for SystemClock {
    fn now_seconds(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock advanced by hand, for headless runs and tests
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward; negative steps are ignored
    pub fn advance(&mut self, seconds: f64) {
        if seconds > 0.0 {
            self.now += seconds;
        }
    }
}

impl Clock for ManualClock {
    fn now_seconds(&self) -> f64 {
        self.now
    }
}

/// Frame timer computing a clamped delta between consecutive frames
///
/// A stalled frame (window drag, debugger break) would otherwise produce a
/// huge step and teleport everything that integrates over `dt`.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_frame: Option<f64>,
    max_delta: f32,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DELTA)
    }
}

impl FrameTimer {
    /// Create a new timer that clamps deltas to `max_delta` seconds
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_frame: None,
            max_delta,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame) and return the new delta
    ///
    /// The first tick yields zero since there is no previous frame.
    pub fn tick(&mut self, clock: &dyn Clock) -> f32 {
        let now = clock.now_seconds();
        let raw = match self.last_frame {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_frame = Some(now);

        if raw > self.max_delta {
            log::warn!("Frame delta {:.3}s clamped to {:.3}s", raw, self.max_delta);
        }
        self.delta_time = clamp_delta(raw, self.max_delta);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total clamped time accumulated by this timer
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

/// Clamp a frame delta into `[0, max_delta]`
pub fn clamp_delta(delta: f32, max_delta: f32) -> f32 {
    if delta.is_nan() {
        0.0
    } else {
        delta.clamp(0.0, max_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let clock = ManualClock::new();
        let mut timer = FrameTimer::default();

        assert_eq!(timer.tick(&clock), 0.0);
        assert_eq!(timer.frame_count(), 1);
    }

    #[test]
    fn test_tick_measures_clock_delta() {
        let mut clock = ManualClock::new();
        let mut timer = FrameTimer::default();
        timer.tick(&clock);

        clock.advance(0.25);
        assert_eq!(timer.tick(&clock), 0.25);
        assert_eq!(timer.total_time(), 0.25);
    }

    #[test]
    fn test_stalled_frame_is_clamped() {
        let mut clock = ManualClock::new();
        let mut timer = FrameTimer::new(1.0);
        timer.tick(&clock);

        clock.advance(7.5);
        assert_eq!(timer.tick(&clock), 1.0);
    }

    #[test]
    fn test_clamp_delta_rejects_negative_and_nan() {
        assert_eq!(clamp_delta(-0.5, 1.0), 0.0);
        assert_eq!(clamp_delta(f32::NAN, 1.0), 0.0);
        assert_eq!(clamp_delta(0.5, 1.0), 0.5);
    }
}
