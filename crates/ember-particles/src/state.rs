//! Particle lifecycle state machine

/// Lifecycle state of a pool slot.
///
/// Only `Alive` particles are simulated and drawn. `Initializing` and `Dying`
/// last exactly one tick: the pool resolves them with [`transition`] before
/// classifying the slot.
///
/// [`transition`]: ParticleState::transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleState {
    #[default]
    Dead,
    Initializing,
    Alive,
    Dying,
}

impl ParticleState {
    /// A slot was claimed and given fresh kinematics
    pub fn create(self) -> Self {
        match self {
            Self::Dead | Self::Dying => Self::Initializing,
            other => other,
        }
    }

    /// The particle's life is over
    pub fn die(self) -> Self {
        match self {
            Self::Initializing | Self::Alive => Self::Dying,
            other => other,
        }
    }

    /// Resolve a pending transient state; steady states are unchanged
    pub fn transition(self) -> Self {
        match self {
            Self::Initializing => Self::Alive,
            Self::Dying => Self::Dead,
            other => other,
        }
    }

    pub fn is_transient(self) -> bool {
        matches!(self, Self::Initializing | Self::Dying)
    }
}
