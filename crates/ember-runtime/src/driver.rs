//! Frame driver: feeds elapsed time into a runtime system

use crate::clock::GameClock;
use crate::system::RuntimeSystem;
use ember_core::EmberError;

/// How the driver produces frame deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Every frame advances by exactly `frame_time`, as fast as possible
    Fixed,
    /// Frames are paced to `frame_time` and deltas measured from the wall clock
    RealTime,
}

pub struct FrameDriver {
    pub clock: GameClock,
    pub pacing: Pacing,
}

impl FrameDriver {
    pub fn new(frame_time: f64, pacing: Pacing) -> Self {
        Self {
            clock: GameClock::with_frame_time(frame_time),
            pacing,
        }
    }

    /// Produce the next frame delta according to the pacing mode
    pub fn next_delta(&mut self) -> f64 {
        match self.pacing {
            Pacing::Fixed => self.clock.advance(),
            Pacing::RealTime => {
                std::thread::sleep(self.clock.remaining_frame_time());
                self.clock.tick()
            }
        }
    }

    /// Run `system` for `frames` frames, calling `on_frame` after each update.
    ///
    /// The callback may fail with any error type that system errors convert into.
    pub fn run<S, F, E>(&mut self, system: &mut S, frames: u64, mut on_frame: F) -> Result<(), E>
    where
        S: RuntimeSystem + ?Sized,
        F: FnMut(&mut S, &GameClock) -> Result<(), E>,
        E: From<EmberError>,
    {
        system.initialize()?;
        log::debug!("[{}] initialized, running {} frame(s)", system.name(), frames);

        for _ in 0..frames {
            let dt = self.next_delta();
            system.update(dt)?;
            on_frame(system, &self.clock)?;
        }

        log::debug!(
            "[{}] stopped after {} frame(s), {:.3}s simulated",
            system.name(),
            self.clock.frame_count,
            self.clock.total_time
        );
        system.shutdown()?;
        Ok(())
    }
}
