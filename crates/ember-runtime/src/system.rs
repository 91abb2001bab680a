//! Runtime system trait

use ember_core::Result;

/// A system that can be ticked by the frame driver
///
/// Systems are updated in registration order, once per frame, with the
/// elapsed time since the previous frame.
pub trait RuntimeSystem {
    /// Called once before the first frame
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame
    fn update(&mut self, dt: f64) -> Result<()>;

    /// Called when the driver stops
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
