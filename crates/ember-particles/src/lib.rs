//! Ember Particles - fixed-capacity firework particle simulation
//!
//! Provides a recycled particle pool with:
//! - A four-state lifecycle (dead, initializing, alive, dying) resolved once per tick
//! - Alive/dead index views rebuilt every tick, O(1) LIFO claims from the dead view
//! - A pluggable `Animator` strategy, with the bounds-checking `FireworksAnimator`
//! - Image-to-shape scanning for custom burst patterns

pub mod animator;
pub mod config;
pub mod fireworks;
pub mod particle;
pub mod pool;
pub mod rand;
pub mod shape;
pub mod shared;
pub mod state;

use ember_core::{fireworks_gradient, Result};
use ember_runtime::RuntimeSystem;

pub use animator::{Animator, ParticleSource};
pub use config::{FireworksConfig, SimulationConfig};
pub use fireworks::{FireworksAnimator, FireworksStats};
pub use particle::{Particle, ParticleInit};
pub use pool::ParticleSystem;
pub use shared::SharedSimulation;
pub use state::ParticleState;

/// The firework simulation: pool plus animator, ticked by the frame driver.
pub struct FireworksSimulation {
    system: ParticleSystem,
    animator: FireworksAnimator,
    reseeds: u64,
}

impl FireworksSimulation {
    /// Build the pool, the reference color ramp and any configured shapes.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        let ramp = fireworks_gradient().build()?;
        let system = ParticleSystem::new(config.capacity)?;
        let mut animator =
            FireworksAnimator::new(config.fireworks.clone(), ramp, config.width, config.height)?;
        if !config.shapes.is_empty() {
            animator.set_shapes(shape::load_shapes(&config.shapes, config.shape_time)?);
        }
        Ok(Self::from_parts(system, animator))
    }

    pub fn from_parts(system: ParticleSystem, animator: FireworksAnimator) -> Self {
        Self {
            system,
            animator,
            reseeds: 0,
        }
    }

    /// Tick the pool; if nothing is left alive, reseed it.
    pub fn step(&mut self, delta_seconds: f32) {
        self.system.tick(&mut self.animator, delta_seconds);
        if self.system.all_dead() {
            self.reseed();
        }
    }

    pub fn reseed(&mut self) {
        log::debug!("all dead, reseeding");
        self.animator.init(&mut self.system);
        self.reseeds += 1;
    }

    /// Back to an empty pool and a freshly seeded animator, keeping all allocations.
    pub fn reset(&mut self) {
        self.system.reset();
        self.animator.reset();
        self.reseeds = 0;
    }

    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.animator.set_bounds(width, height);
    }

    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    pub fn system_mut(&mut self) -> &mut ParticleSystem {
        &mut self.system
    }

    pub fn animator(&self) -> &FireworksAnimator {
        &self.animator
    }

    pub fn reseeds(&self) -> u64 {
        self.reseeds
    }
}

impl RuntimeSystem for FireworksSimulation {
    fn initialize(&mut self) -> Result<()> {
        if self.system.all_dead() {
            self.reseed();
        }
        log::info!(
            "[fireworks] pool of {} particle(s), {} shape(s)",
            self.system.capacity(),
            self.animator.shape_count()
        );
        Ok(())
    }

    fn update(&mut self, dt: f64) -> Result<()> {
        self.step(dt as f32);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        let stats = self.animator.stats();
        log::info!(
            "[fireworks] spawned {}, killed {}, {} burst(s), {} reseed(s)",
            stats.spawned,
            stats.killed,
            stats.batches,
            self.reseeds
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "fireworks"
    }
}
