//! Step observer trait for monitoring simulation progress.

use crate::error::Axis;
use crate::id::ParticleId;

/// Trait for observing simulation steps.
///
/// This is the crate's diagnostics channel: implement it to log, count or
/// visualise what happens inside [`World::step`](crate::World::step). All
/// methods have default no-op implementations.
pub trait StepObserver {
    /// An obstacle stopped a particle on `axis` and reversed that velocity component.
    fn on_obstacle_blocked(&mut self, _particle: ParticleId, _axis: Axis) {}

    /// A particle reached the world edge on `axis` and bounced.
    fn on_boundary_bounce(&mut self, _particle: ParticleId, _axis: Axis) {}

    /// NaN state was found and reset to safe defaults.
    fn on_sanitized(&mut self, _particle: ParticleId) {}

    /// Two particles of different shapes overlapped and were pushed apart.
    fn on_repulsion(&mut self, _particle: ParticleId, _other: ParticleId) {}

    /// Called after a particle finished its update, in update order.
    fn on_particle_updated(&mut self, _index: usize, _particle: ParticleId) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that tallies every event. Handy in tests and debug overlays.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StepCounter {
    pub obstacle_blocks: usize,
    pub boundary_bounces: usize,
    pub sanitized: usize,
    pub repulsions: usize,
    pub particles_updated: usize,
    pub steps: usize,
}

impl StepObserver for StepCounter {
    fn on_obstacle_blocked(&mut self, _particle: ParticleId, _axis: Axis) {
        self.obstacle_blocks += 1;
    }

    fn on_boundary_bounce(&mut self, _particle: ParticleId, _axis: Axis) {
        self.boundary_bounces += 1;
    }

    fn on_sanitized(&mut self, _particle: ParticleId) {
        self.sanitized += 1;
    }

    fn on_repulsion(&mut self, _particle: ParticleId, _other: ParticleId) {
        self.repulsions += 1;
    }

    fn on_particle_updated(&mut self, _index: usize, _particle: ParticleId) {
        self.particles_updated += 1;
    }

    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}
