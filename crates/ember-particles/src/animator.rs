//! Behavior strategy contract driven by the pool

use crate::particle::Particle;

/// Anything that hands out free particle slots.
///
/// Implemented by the pool itself (between ticks) and by the spawner the pool
/// passes to [`Animator::tick`]. `None` means the dead view is exhausted,
/// which callers treat as "skip this spawn", never as an error.
pub trait ParticleSource {
    fn claim_dead_particle(&mut self) -> Option<&mut Particle>;

    /// Slots that can still be claimed before the next tick
    fn claimable(&self) -> usize;
}

/// Per-frame behavior applied to the pool.
pub trait Animator {
    /// Called once per tick before any particle is visited
    fn before_tick(&mut self, delta_seconds: f32);

    /// Called for every alive particle. New particles may be claimed from
    /// `source`; they stay `Initializing` until the next tick.
    fn tick(&mut self, particle: &mut Particle, source: &mut dyn ParticleSource, delta_seconds: f32);

    /// Reseed the pool, typically after every particle has died
    fn init(&mut self, source: &mut dyn ParticleSource);
}
