//! Frame clock producing per-frame elapsed time

use std::time::{Duration, Instant};

/// Longest frame delta handed to the simulation (avoids huge Euler steps after a stall)
const MAX_DELTA: f64 = 0.25;

/// Tracks frame time for the simulation driver.
///
/// `tick()` measures wall-clock time between frames; `advance()` steps by the
/// fixed `frame_time` for headless, reproducible runs.
pub struct GameClock {
    /// Total elapsed simulation time in seconds
    pub total_time: f64,
    /// Time since last frame in seconds
    pub delta_time: f64,
    /// Target frame interval (default: 16 ms)
    pub frame_time: f64,
    /// Frames produced so far
    pub frame_count: u64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame_time: 0.016,
            frame_count: 0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock with a custom frame interval in seconds
    pub fn with_frame_time(seconds: f64) -> Self {
        Self {
            frame_time: seconds,
            ..Self::default()
        }
    }

    /// Advance by measured wall-clock time. Call once per frame.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        self.frame_count += 1;

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return 0.0;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;

        self.delta_time = elapsed.min(MAX_DELTA);
        self.total_time += self.delta_time;
        self.delta_time
    }

    /// Advance by exactly one `frame_time`, ignoring the wall clock.
    pub fn advance(&mut self) -> f64 {
        self.frame_count += 1;
        self.delta_time = self.frame_time;
        self.total_time += self.delta_time;
        self.delta_time
    }

    /// How long to sleep so the current frame lasts `frame_time`
    pub fn remaining_frame_time(&self) -> Duration {
        let spent = self.last_instant.elapsed().as_secs_f64();
        Duration::from_secs_f64((self.frame_time - spent).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = GameClock::new();
        assert!((clock.frame_time - 0.016).abs() < 1e-10);
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame_count, 0);
    }

    #[test]
    fn test_custom_frame_time() {
        let clock = GameClock::with_frame_time(1.0 / 30.0);
        assert!((clock.frame_time - 1.0 / 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = GameClock::new();
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.frame_count, 1);
    }

    #[test]
    fn test_tick_delta_is_clamped() {
        let mut clock = GameClock::new();
        clock.tick();
        clock.last_instant = Instant::now() - Duration::from_secs(2);
        let dt = clock.tick();
        assert!((dt - MAX_DELTA).abs() < 1e-10);
        assert!((clock.total_time - MAX_DELTA).abs() < 1e-10);
    }

    #[test]
    fn test_fixed_advance() {
        let mut clock = GameClock::with_frame_time(0.5);
        assert_eq!(clock.advance(), 0.5);
        assert_eq!(clock.advance(), 0.5);
        assert!((clock.total_time - 1.0).abs() < 1e-10);
        assert_eq!(clock.frame_count, 2);
    }

    #[test]
    fn test_remaining_frame_time_never_negative() {
        let mut clock = GameClock::with_frame_time(0.0);
        clock.tick();
        assert_eq!(clock.remaining_frame_time(), Duration::ZERO);
    }
}
