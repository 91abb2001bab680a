//! Particle slot: kinematics plus lifecycle state

use crate::state::ParticleState;
use ember_core::{color, Vec2};

/// One simulated point. Slots live in the pool for its whole lifetime and are
/// recycled through the lifecycle states, never deallocated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Packed `0xAARRGGBB`
    pub color: u32,
    /// Remaining life in ticks
    pub age: i32,
    /// Already triggered a spawn batch during this life
    pub mark: bool,
    state: ParticleState,
}

/// Fresh kinematics for a claimed slot, applied in one step by [`Particle::spawn`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleInit {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub color: u32,
    pub age: i32,
}

impl Particle {
    pub fn dead() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            color: color::WHITE,
            age: 0,
            mark: false,
            state: ParticleState::Dead,
        }
    }

    /// Restore the canonical dead zero-state
    pub fn reset(&mut self) {
        *self = Self::dead();
    }

    pub fn state(&self) -> ParticleState {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == ParticleState::Alive
    }

    pub fn is_dead(&self) -> bool {
        self.state == ParticleState::Dead
    }

    /// Enter `Initializing`; the particle turns `Alive` at the next pool tick
    pub fn instantiate(&mut self) {
        self.state = self.state.create();
    }

    /// Instantiate and assign all kinematics at once
    pub fn spawn(&mut self, init: ParticleInit) {
        self.instantiate();
        self.position = init.position;
        self.velocity = init.velocity;
        self.acceleration = init.acceleration;
        self.color = init.color;
        self.age = init.age;
    }

    /// Enter `Dying`; the slot is recycled at the next pool tick
    pub fn kill(&mut self) {
        self.state = self.state.die();
    }

    pub fn do_state_transition(&mut self) {
        self.state = self.state.transition();
    }

    /// Explicit Euler step
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
    }
}

impl Default for Particle {
    fn default() -> Self {
        Self::dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() -> ParticleInit {
        ParticleInit {
            position: Vec2::new(1.0, 2.0),
            velocity: Vec2::new(10.0, 0.0),
            acceleration: Vec2::new(0.0, -10.0),
            color: color::RED,
            age: 42,
        }
    }

    #[test]
    fn spawn_assigns_kinematics_and_initializes() {
        let mut p = Particle::dead();
        p.spawn(init());
        assert_eq!(p.state(), ParticleState::Initializing);
        assert_eq!(p.position, Vec2::new(1.0, 2.0));
        assert_eq!(p.color, color::RED);
        assert_eq!(p.age, 42);
        assert!(!p.is_alive());

        p.do_state_transition();
        assert!(p.is_alive());
    }

    #[test]
    fn kill_then_transition_is_dead() {
        let mut p = Particle::dead();
        p.spawn(init());
        p.do_state_transition();
        p.kill();
        assert_eq!(p.state(), ParticleState::Dying);
        p.do_state_transition();
        assert!(p.is_dead());
    }

    #[test]
    fn integrate_is_explicit_euler() {
        let mut p = Particle::dead();
        p.spawn(init());
        p.integrate(0.5);
        // v = (10, 0) + (0, -10) * 0.5 = (10, -5); p = (1, 2) + (10, -5) * 0.5
        assert_eq!(p.velocity, Vec2::new(10.0, -5.0));
        assert_eq!(p.position, Vec2::new(6.0, -0.5));
    }

    #[test]
    fn reset_restores_dead_zero_state() {
        let mut p = Particle::dead();
        p.spawn(init());
        p.mark = true;
        p.do_state_transition();
        p.reset();
        assert_eq!(p, Particle::dead());
        assert_eq!(p.color, color::WHITE);
    }
}
