//! Ember Runtime - Frame loop infrastructure
//!
//! Provides the frame loop building blocks:
//! - `GameClock` - per-frame elapsed time, wall-clock or fixed-step
//! - `FrameDriver` - runs a system for N frames with a chosen pacing
//! - `RuntimeSystem` - trait for systems ticked by the frame loop

mod clock;
mod driver;
mod system;

pub use clock::GameClock;
pub use driver::{FrameDriver, Pacing};
pub use system::RuntimeSystem;
