//! Tunable constants of the simulation step.

use crate::float::Float;

/// Constants used by every particle update.
///
/// These are empirical knobs, not physical quantities. The defaults are tuned
/// together; changing one changes how every body moves.
///
/// # Builder Pattern
/// ```
/// use softblob::config::WorldConfig;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_damping(0.99)
///     .with_gravity_scale(0.0);
/// assert_eq!(config.damping, 0.99);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig<F: Float> {
    /// Velocity multiplier applied every step. Default: 0.98.
    pub damping: F,
    /// Gravity added to vertical velocity, per unit of mass. Default: 0.2.
    pub gravity_scale: F,
    /// Velocity kept (and reversed) when an obstacle blocks an axis. Default: 1.0.
    pub obstacle_restitution: F,
    /// Velocity kept (and reversed) when a particle crosses the world edge. Default: 0.9.
    pub bound_restitution: F,
    /// Spring force is `fc - fc / spring_softening`. Default: 1.15.
    pub spring_softening: F,
    /// Overlap-to-push factor for particles of different shapes. Default: 16.
    pub repulsion_scale: F,
    /// Scale of the velocity nudge given to the pushed-against particle. Default: 1e-6.
    pub reaction_scale: F,
    /// Velocity multiplier for a particle that was pushed out of an overlap. Default: 0.5.
    pub contact_damping: F,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            damping: F::from_f64(0.98),
            gravity_scale: F::from_f64(0.2),
            obstacle_restitution: F::one(),
            bound_restitution: F::from_f64(0.9),
            spring_softening: F::from_f64(1.15),
            repulsion_scale: F::from_f64(16.0),
            reaction_scale: F::from_f64(1e-6),
            contact_damping: F::half(),
        }
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set gravity per unit mass. Zero disables gravity.
    pub fn with_gravity_scale(mut self, gravity_scale: F) -> Self {
        self.gravity_scale = gravity_scale;
        self
    }

    pub fn with_obstacle_restitution(mut self, restitution: F) -> Self {
        self.obstacle_restitution = restitution;
        self
    }

    pub fn with_bound_restitution(mut self, restitution: F) -> Self {
        self.bound_restitution = restitution;
        self
    }

    pub fn with_spring_softening(mut self, softening: F) -> Self {
        self.spring_softening = softening;
        self
    }

    /// Set the repulsion push factor and the partner reaction scale together.
    pub fn with_repulsion(mut self, scale: F, reaction: F) -> Self {
        self.repulsion_scale = scale;
        self.reaction_scale = reaction;
        self
    }

    pub fn with_contact_damping(mut self, contact_damping: F) -> Self {
        self.contact_damping = contact_damping;
        self
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
