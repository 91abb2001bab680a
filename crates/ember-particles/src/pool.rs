//! Fixed-capacity particle pool with alive/dead index views
//!
//! Every tick the pool resolves pending lifecycle transitions, rebuilds the
//! alive and dead views so that together they cover every slot exactly once,
//! and runs the animator over the alive view. Free slots are handed out from
//! the tail of the dead view (LIFO) until the next tick rebuilds it.

use crate::animator::{Animator, ParticleSource};
use crate::particle::Particle;
use ember_core::{EmberError, Result};

pub struct ParticleSystem {
    particles: Vec<Particle>,
    alive: Vec<usize>,
    dead: Vec<usize>,
    /// Unclaimed entries at the front of `dead`; the next claim takes `dead[claimable - 1]`
    claimable: usize,
}

impl ParticleSystem {
    /// Age given to slots when they are recycled, so they stay inert until reclaimed
    pub const DEAD_AGE: i32 = 100;

    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(EmberError::InvalidCapacity(capacity));
        }
        let mut system = Self {
            particles: vec![Particle::dead(); capacity],
            alive: Vec::with_capacity(capacity),
            dead: Vec::with_capacity(capacity),
            claimable: 0,
        };
        system.rebuild_dead_view();
        Ok(system)
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// Advance one frame.
    pub fn tick<A: Animator + ?Sized>(&mut self, animator: &mut A, delta_seconds: f32) {
        animator.before_tick(delta_seconds);

        self.alive.clear();
        self.dead.clear();
        for (idx, p) in self.particles.iter_mut().enumerate().rev() {
            if p.state().is_transient() {
                p.do_state_transition();
                if p.is_dead() {
                    p.mark = false;
                    p.age = Self::DEAD_AGE;
                }
            }
            if p.is_alive() {
                self.alive.push(idx);
            } else {
                self.dead.push(idx);
            }
        }
        self.claimable = self.dead.len();

        let mut spawner = Spawner {
            particles: self.particles.as_mut_slice(),
            dead: &self.dead,
            claimable: &mut self.claimable,
        };
        for &idx in &self.alive {
            // alive and dead views are disjoint, so claims never touch `idx`
            let mut particle = spawner.particles[idx];
            animator.tick(&mut particle, &mut spawner, delta_seconds);
            spawner.particles[idx] = particle;
        }
    }

    /// Take one slot from the tail of the dead view. Never returns the same
    /// slot twice before the next tick.
    pub fn claim_dead_particle(&mut self) -> Option<&mut Particle> {
        claim(&mut self.particles, &self.dead, &mut self.claimable)
    }

    pub fn alive_particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.alive.iter().map(move |&idx| &self.particles[idx])
    }

    pub fn dead_particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.dead.iter().map(move |&idx| &self.particles[idx])
    }

    /// Visit the alive view; returning `false` from `visitor` stops early.
    pub fn visit_alive_particles<F: FnMut(&Particle) -> bool>(&self, mut visitor: F) {
        for p in self.alive_particles() {
            if !visitor(p) {
                return;
            }
        }
    }

    pub fn visit_dead_particles<F: FnMut(&Particle)>(&self, visitor: F) {
        self.dead_particles().for_each(visitor);
    }

    /// Visit at most `max_visits` entries of the dead view.
    pub fn visit_dead_particles_limited<F: FnMut(&Particle)>(
        &self,
        visitor: F,
        max_visits: usize,
    ) -> Result<()> {
        if max_visits < 1 {
            return Err(EmberError::InvalidVisitLimit(max_visits));
        }
        self.dead_particles().take(max_visits).for_each(visitor);
        Ok(())
    }

    pub fn all_dead(&self) -> bool {
        self.alive.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    pub fn dead_count(&self) -> usize {
        self.dead.len()
    }

    pub fn claimable_count(&self) -> usize {
        self.claimable
    }

    /// Return every slot to the dead zero-state without reallocating.
    pub fn reset(&mut self) {
        for p in self.particles.iter_mut().rev() {
            p.reset();
        }
        self.alive.clear();
        self.rebuild_dead_view();
    }

    fn rebuild_dead_view(&mut self) {
        self.dead.clear();
        self.dead.extend((0..self.particles.len()).rev());
        self.claimable = self.dead.len();
    }
}

impl ParticleSource for ParticleSystem {
    fn claim_dead_particle(&mut self) -> Option<&mut Particle> {
        ParticleSystem::claim_dead_particle(self)
    }

    fn claimable(&self) -> usize {
        self.claimable
    }
}

/// Claim handle given to the animator while the pool is ticking
struct Spawner<'a> {
    particles: &'a mut [Particle],
    dead: &'a [usize],
    claimable: &'a mut usize,
}

impl ParticleSource for Spawner<'_> {
    fn claim_dead_particle(&mut self) -> Option<&mut Particle> {
        claim(&mut *self.particles, self.dead, &mut *self.claimable)
    }

    fn claimable(&self) -> usize {
        *self.claimable
    }
}

fn claim<'p>(
    particles: &'p mut [Particle],
    dead: &[usize],
    claimable: &mut usize,
) -> Option<&'p mut Particle> {
    if *claimable == 0 {
        return None;
    }
    *claimable -= 1;
    Some(&mut particles[dead[*claimable]])
}
