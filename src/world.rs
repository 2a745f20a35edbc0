//! The simulation world: owns particles, shapes and obstacles and steps them.

use crate::bounds::Bounds;
use crate::composite::Composite;
use crate::config::WorldConfig;
use crate::error::{Axis, PhysicsError};
use crate::float::Float;
use crate::id::{ParticleId, ShapeId};
use crate::obstacle::Obstacle;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::shape::{Shape, ShapeView};
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec as AllocVec;

/// Owns every particle, shape and obstacle and advances them one step at a time.
///
/// # Update order
///
/// [`World::step`] updates particles one after another in array order (the
/// order they were added). A particle's pairwise pass reads the positions of
/// particles already updated this step and may write the velocity of the
/// particle it collides with, so the order is part of the result. Stepping is
/// single threaded and fully deterministic.
pub struct World<F: Float> {
    particles: AllocVec<Particle<F>>,
    shapes: AllocVec<Shape<F>>,
    obstacles: AllocVec<Obstacle<F>>,
    bounds: Bounds<F>,
    config: WorldConfig<F>,
    index: BTreeMap<ParticleId, usize>,
}

impl<F: Float> World<F> {
    /// Empty, unbounded world with default constants.
    pub fn new() -> Self {
        Self::with_config(WorldConfig::new())
    }

    pub fn with_config(config: WorldConfig<F>) -> Self {
        World {
            particles: AllocVec::new(),
            shapes: AllocVec::new(),
            obstacles: AllocVec::new(),
            bounds: Bounds::unbounded(),
            config,
            index: BTreeMap::new(),
        }
    }

    /// Bound the world by two corners. Corners are not reordered; see
    /// [`Bounds::clamp_axis`] for inverted or too-small boxes.
    pub fn set_bounds(&mut self, x1: F, y1: F, x2: F, y2: F) {
        self.bounds = Bounds::from_corners(x1, y1, x2, y2);
    }

    pub fn remove_bounds(&mut self) {
        self.bounds = Bounds::unbounded();
    }

    pub fn bounds(&self) -> &Bounds<F> {
        &self.bounds
    }

    pub fn config(&self) -> &WorldConfig<F> {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut WorldConfig<F> {
        &mut self.config
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle<F>) {
        self.obstacles.push(obstacle);
    }

    /// Absorb a template's output. Empty collections add nothing.
    ///
    /// Every particle is validated and every particle and shape id must be
    /// new to the world (adding a cloned composite twice is rejected). On
    /// error nothing is added.
    pub fn add(&mut self, composite: Composite<F>) -> Result<(), PhysicsError> {
        let mut seen = BTreeSet::new();
        for p in &composite.particles {
            p.validate()?;
            if self.index.contains_key(&p.id()) || !seen.insert(p.id()) {
                return Err(PhysicsError::DuplicateParticle(p.id()));
            }
        }
        let mut seen_shapes = BTreeSet::new();
        for s in &composite.shapes {
            if self.shapes.iter().any(|own| own.id() == s.id()) || !seen_shapes.insert(s.id()) {
                return Err(PhysicsError::DuplicateShape(s.id()));
            }
        }

        let Composite { particles, shapes, obstacles } = composite;
        for p in particles {
            self.index.insert(p.id(), self.particles.len());
            self.particles.push(p);
        }
        self.shapes.extend(shapes);
        self.obstacles.extend(obstacles);
        Ok(())
    }

    /// Add a single particle that belongs to no shape.
    pub fn add_particle(&mut self, particle: Particle<F>) -> Result<ParticleId, PhysicsError> {
        particle.validate()?;
        let id = particle.id();
        if self.index.contains_key(&id) {
            return Err(PhysicsError::DuplicateParticle(id));
        }
        self.index.insert(id, self.particles.len());
        self.particles.push(particle);
        Ok(id)
    }

    /// Remove a particle and its row/column of its shape's rest table.
    ///
    /// Remaining members of that shape are renumbered so slots stay dense.
    /// The removed particle is returned without a shape.
    pub fn remove_particle(&mut self, id: ParticleId) -> Result<Particle<F>, PhysicsError> {
        let idx = *self.index.get(&id).ok_or(PhysicsError::UnknownParticle(id))?;
        let mut removed = self.particles.remove(idx);

        if let Some(m) = removed.membership() {
            if let Some(shape) = self.shapes.iter_mut().find(|s| s.id() == m.shape) {
                shape.remove_slot(m.slot);
            }
            for p in self.particles.iter_mut() {
                if let Some(other) = p.membership() {
                    if other.shape == m.shape && other.slot > m.slot {
                        p.set_slot(other.slot - 1);
                    }
                }
            }
            removed.clear_membership();
        }

        self.reindex();
        Ok(removed)
    }

    fn reindex(&mut self) {
        self.index = self
            .particles
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id(), i))
            .collect();
    }

    /// Advance one step without observation.
    pub fn update(&mut self) {
        self.step(&mut NoOpStepObserver);
    }

    /// Advance one step, reporting events to `observer`.
    ///
    /// Each particle in turn integrates itself (move, damping, gravity,
    /// bounds, NaN repair), then interacts with every other particle, then is
    /// repaired and clamped once more so it ends its update finite and inside
    /// the bounds.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        let shape_pos: BTreeMap<ShapeId, usize> =
            self.shapes.iter().enumerate().map(|(i, s)| (s.id(), i)).collect();
        let n = self.particles.len();

        for i in 0..n {
            self.particles[i].integrate(&self.obstacles, &self.bounds, &self.config, observer);

            for j in 0..n {
                if j == i {
                    continue;
                }
                let (me, other) = pair_mut(&mut self.particles, i, j);
                let rest = rest_between(&self.shapes, &shape_pos, me, other);
                if me.interact(other, rest, &self.config) {
                    observer.on_repulsion(me.id(), other.id());
                }
            }

            let p = &mut self.particles[i];
            if p.contain(&self.bounds) {
                observer.on_sanitized(p.id());
            }
            observer.on_particle_updated(i, p.id());
        }

        observer.on_step_complete();
    }

    /// All particles in update order.
    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn shapes(&self) -> &[Shape<F>] {
        &self.shapes
    }

    pub fn obstacles(&self) -> &[Obstacle<F>] {
        &self.obstacles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle<F>> {
        self.index.get(&id).map(|&i| &self.particles[i])
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle<F>> {
        match self.index.get(&id) {
            Some(&i) => Some(&mut self.particles[i]),
            None => None,
        }
    }

    /// A shape joined with its particles, for centroid and outline queries.
    pub fn shape(&self, id: ShapeId) -> Option<ShapeView<'_, F>> {
        let shape = self.shapes.iter().find(|s| s.id() == id)?;
        let points = shape.members().iter().filter_map(|m| self.particle(*m)).collect();
        Some(ShapeView::new(shape, points))
    }

    /// Set the velocity of every member of a shape.
    pub fn set_shape_velocity(&mut self, id: ShapeId, x: F, y: F) -> Result<(), PhysicsError> {
        let shape = self
            .shapes
            .iter()
            .find(|s| s.id() == id)
            .ok_or(PhysicsError::UnknownShape(id))?;
        for m in shape.members() {
            if let Some(&i) = self.index.get(m) {
                // Keeps the valid axis; the NaN report is raised once below.
                let _ = self.particles[i].set_velocity(x, y);
            }
        }
        match Axis::from_flags(x.is_nan(), y.is_nan()) {
            None => Ok(()),
            Some(axis) => Err(PhysicsError::NotANumber { setter: "Shape::set_velocity", axis }),
        }
    }
}

impl<F: Float> Default for World<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two distinct mutable elements of a slice.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = items.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

/// Rest distance between two particles, zero unless they share a shape.
fn rest_between<F: Float>(
    shapes: &[Shape<F>],
    shape_pos: &BTreeMap<ShapeId, usize>,
    a: &Particle<F>,
    b: &Particle<F>,
) -> F {
    match (a.membership(), b.membership()) {
        (Some(ma), Some(mb)) if ma.shape == mb.shape => shape_pos
            .get(&ma.shape)
            .map(|&s| shapes[s].rest_length(ma.slot, mb.slot))
            .unwrap_or_else(F::zero),
        _ => F::zero(),
    }
}
