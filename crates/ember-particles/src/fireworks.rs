//! Bounds-checking firework animator
//!
//! Ages every alive particle by one per tick, kills it when its age runs out
//! or it leaves the viewport, and colors it from the ramp by remaining age.
//! Every `spawn_interval` particle ticks one unmarked particle may burst into
//! a batch of children, throttled by a time-bucketed budget of batches in
//! flight.

use crate::animator::{Animator, ParticleSource};
use crate::config::FireworksConfig;
use crate::particle::{Particle, ParticleInit};
use crate::rand::ParticleRng;
use ember_core::{Bounds, ColorRamp, EmberError, Result, Vec2};
use serde::Serialize;

/// Running counters, reset with [`FireworksAnimator::reset_stats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FireworksStats {
    pub spawned: u64,
    pub killed: u64,
    pub batches: u64,
}

pub struct FireworksAnimator {
    config: FireworksConfig,
    ramp: ColorRamp,
    rng: ParticleRng,
    bounds: Bounds,
    shapes: Vec<Vec<Vec2>>,
    shape_idx: usize,
    batches_in_flight: u32,
    elapsed: f32,
    particle_ticks: u64,
    stats: FireworksStats,
}

impl FireworksAnimator {
    pub fn new(config: FireworksConfig, ramp: ColorRamp, width: u32, height: u32) -> Result<Self> {
        if ramp.is_empty() {
            return Err(EmberError::EmptyColorRamp);
        }
        if !(config.throttle_slice > 0.0) {
            return Err(EmberError::ConfigError(format!(
                "throttle_slice must be positive, got {}",
                config.throttle_slice
            )));
        }
        let rng = ParticleRng::new(config.seed);
        Ok(Self {
            config,
            ramp,
            rng,
            bounds: Bounds::from_viewport(width, height),
            shapes: Vec::new(),
            shape_idx: 0,
            batches_in_flight: 0,
            elapsed: 0.0,
            particle_ticks: 0,
            stats: FireworksStats::default(),
        })
    }

    /// Recompute the kill bounds after a viewport resize
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.bounds = Bounds::from_viewport(width, height);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Displacement lists used round-robin, one per spawn batch. Empty
    /// shapes are dropped.
    pub fn set_shapes(&mut self, shapes: Vec<Vec<Vec2>>) {
        self.shapes = shapes.into_iter().filter(|s| !s.is_empty()).collect();
        self.shape_idx = 0;
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    pub fn config(&self) -> &FireworksConfig {
        &self.config
    }

    pub fn stats(&self) -> FireworksStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = FireworksStats::default();
    }

    /// Restart from the configured seed with an empty burst budget
    pub fn reset(&mut self) {
        self.rng = ParticleRng::new(self.config.seed);
        self.shape_idx = 0;
        self.batches_in_flight = 0;
        self.elapsed = 0.0;
        self.particle_ticks = 0;
        self.reset_stats();
    }

    pub fn batches_in_flight(&self) -> u32 {
        self.batches_in_flight
    }

    pub fn is_out_of_bounds(&self, p: &Particle) -> bool {
        !self.bounds.contains(p.position)
    }

    fn max_age(&self) -> i32 {
        self.ramp.max_index() as i32
    }

    fn launch(&self, position: Vec2, velocity: Vec2) -> ParticleInit {
        ParticleInit {
            position,
            velocity,
            acceleration: Vec2::new(0.0, self.config.gravity),
            color: self.ramp.at_clamped(0),
            age: self.max_age(),
        }
    }

    fn random_launch(&mut self) -> ParticleInit {
        let position = self.rng.jitter(self.config.spawn_radius);
        let velocity = self.rng.jitter(self.config.launch_speed);
        self.launch(position, velocity)
    }

    /// Claim children around `parent`. Succeeds if at least one child was claimed.
    fn spawn_children(&mut self, parent: &Particle, source: &mut dyn ParticleSource) -> bool {
        let mut claimed = 0u64;

        if !self.shapes.is_empty() {
            let idx = self.shape_idx;
            self.shape_idx = (self.shape_idx + 1) % self.shapes.len();
            let gravity = Vec2::new(0.0, self.config.gravity);
            let color = self.ramp.at_clamped(0);
            let age = self.max_age();
            for &displacement in self.shapes[idx].iter().rev() {
                let Some(child) = source.claim_dead_particle() else {
                    break;
                };
                child.spawn(ParticleInit {
                    position: parent.position,
                    velocity: parent.velocity + displacement,
                    acceleration: gravity,
                    color,
                    age,
                });
                claimed += 1;
            }
        } else {
            for _ in 0..self.config.batch_size {
                let Some(child) = source.claim_dead_particle() else {
                    break;
                };
                let mut init = self.random_launch();
                init.position = parent.position;
                init.velocity += parent.velocity;
                child.spawn(init);
                claimed += 1;
            }
        }

        self.stats.spawned += claimed;
        claimed > 0
    }
}

impl Animator for FireworksAnimator {
    fn before_tick(&mut self, delta_seconds: f32) {
        self.elapsed += delta_seconds;
        if self.elapsed > self.config.throttle_slice {
            self.elapsed -= self.config.throttle_slice;
            self.batches_in_flight = self.batches_in_flight.saturating_sub(1);
        }
    }

    fn tick(&mut self, particle: &mut Particle, source: &mut dyn ParticleSource, delta_seconds: f32) {
        self.particle_ticks += 1;
        particle.integrate(delta_seconds);
        particle.age -= 1;

        if particle.age < 0 || self.is_out_of_bounds(particle) {
            self.stats.killed += 1;
            particle.kill();
            return;
        }
        if particle.age > 0 {
            particle.color = self.ramp.at_clamped(particle.age);
        }

        if self.config.spawn_interval > 0
            && self.particle_ticks % self.config.spawn_interval == 0
            && self.batches_in_flight < self.config.max_batches_in_flight
            && !particle.mark
            && self.spawn_children(particle, source)
        {
            particle.mark = true;
            self.batches_in_flight += 1;
            self.stats.batches += 1;
            log::debug!(
                "burst at ({:.1}, {:.1}), {} batch(es) in flight",
                particle.position.x,
                particle.position.y,
                self.batches_in_flight
            );
        }
    }

    fn init(&mut self, source: &mut dyn ParticleSource) {
        let budget = self.config.init_limit.min(source.claimable());
        let mut seeded = 0u64;
        for _ in 0..budget {
            let init = self.random_launch();
            let Some(p) = source.claim_dead_particle() else {
                break;
            };
            p.spawn(init);
            seeded += 1;
        }
        self.stats.spawned += seeded;
        log::debug!("reseeded {seeded} particle(s)");
    }
}
