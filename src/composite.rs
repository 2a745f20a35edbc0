//! Bundles of particles, shapes and obstacles handed to [`World::add`](crate::World::add).

use crate::error::PhysicsError;
use crate::float::Float;
use crate::obstacle::Obstacle;
use crate::particle::Particle;
use crate::shape::Shape;
use alloc::vec::Vec as AllocVec;

/// Output of a template: anything the world can absorb in one call.
///
/// Any of the three collections may be empty.
#[derive(Debug, Clone)]
pub struct Composite<F: Float> {
    pub particles: AllocVec<Particle<F>>,
    pub shapes: AllocVec<Shape<F>>,
    pub obstacles: AllocVec<Obstacle<F>>,
}

impl<F: Float> Composite<F> {
    pub fn new() -> Self {
        Composite {
            particles: AllocVec::new(),
            shapes: AllocVec::new(),
            obstacles: AllocVec::new(),
        }
    }

    pub fn from_obstacle(obstacle: Obstacle<F>) -> Self {
        let mut c = Self::new();
        c.obstacles.push(obstacle);
        c
    }

    /// Set every particle's velocity, e.g. to launch a body before adding it.
    ///
    /// NaN is rejected per axis as in [`Particle::set_velocity`]; the first
    /// rejection is returned after all particles were visited.
    pub fn set_velocity(&mut self, x: F, y: F) -> Result<(), PhysicsError> {
        let mut result = Ok(());
        for p in self.particles.iter_mut() {
            if let Err(e) = p.set_velocity(x, y) {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty() && self.shapes.is_empty() && self.obstacles.is_empty()
    }
}

impl<F: Float> Default for Composite<F> {
    fn default() -> Self {
        Self::new()
    }
}
