//! Thread-shareable simulation behind one coarse lock
//!
//! Ticking, reseeding, claiming, visiting and bounds updates all take the same
//! mutex, so a reader on another thread only ever sees the views produced by
//! the last completed tick.

use crate::fireworks::FireworksStats;
use crate::particle::{Particle, ParticleInit};
use crate::FireworksSimulation;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone)]
pub struct SharedSimulation {
    inner: Arc<Mutex<FireworksSimulation>>,
}

impl SharedSimulation {
    pub fn new(simulation: FireworksSimulation) -> Self {
        Self {
            inner: Arc::new(Mutex::new(simulation)),
        }
    }

    /// Tick and, on total die-off, reseed, in one critical section.
    pub fn step(&self, delta_seconds: f32) {
        self.inner.lock().step(delta_seconds);
    }

    pub fn visit_alive_particles<F: FnMut(&Particle) -> bool>(&self, visitor: F) {
        self.inner.lock().system().visit_alive_particles(visitor);
    }

    pub fn alive_count(&self) -> usize {
        self.inner.lock().system().alive_count()
    }

    pub fn all_dead(&self) -> bool {
        self.inner.lock().system().all_dead()
    }

    /// Claim a free slot and spawn into it. Returns false if the pool is exhausted.
    pub fn spawn(&self, init: ParticleInit) -> bool {
        let mut sim = self.inner.lock();
        match sim.system_mut().claim_dead_particle() {
            Some(p) => {
                p.spawn(init);
                true
            }
            None => false,
        }
    }

    pub fn set_bounds(&self, width: u32, height: u32) {
        self.inner.lock().set_bounds(width, height);
    }

    pub fn stats(&self) -> FireworksStats {
        self.inner.lock().animator().stats()
    }

    /// Run `f` with exclusive access to the whole simulation
    pub fn with<R>(&self, f: impl FnOnce(&mut FireworksSimulation) -> R) -> R {
        f(&mut *self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FireworksConfig, SimulationConfig};
    use ember_core::{color, Vec2};
    use std::thread;

    fn small_sim() -> FireworksSimulation {
        let config = SimulationConfig {
            capacity: 2_000,
            fireworks: FireworksConfig {
                spawn_interval: 7,
                init_limit: 300,
                ..Default::default()
            },
            ..Default::default()
        };
        FireworksSimulation::new(&config).unwrap()
    }

    #[test]
    fn readers_always_see_a_complete_partition() {
        let shared = SharedSimulation::new(small_sim());
        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    shared.step(0.016);
                }
            })
        };

        for _ in 0..200 {
            shared.with(|sim| {
                let system = sim.system();
                assert_eq!(system.alive_count() + system.dead_count(), system.capacity());
            });
        }
        writer.join().unwrap();
        assert!(shared.stats().spawned > 0);
    }

    #[test]
    fn spawn_claims_under_the_lock() {
        let shared = SharedSimulation::new(small_sim());
        shared.with(|sim| sim.system_mut().reset());
        let init = ParticleInit {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            color: color::WHITE,
            age: 10,
        };
        assert!(shared.spawn(init));
        shared.step(0.016);
        assert_eq!(shared.alive_count(), 1);

        let mut seen = 0;
        shared.visit_alive_particles(|p| {
            seen += 1;
            p.is_alive()
        });
        assert_eq!(seen, 1);
        assert!(!shared.all_dead());
    }

    #[test]
    fn bounds_update_is_visible_to_the_animator() {
        let shared = SharedSimulation::new(small_sim());
        shared.set_bounds(10, 20);
        let max = shared.with(|sim| sim.animator().bounds().max);
        assert_eq!(max, Vec2::new(5.0, 10.0));
    }
}
