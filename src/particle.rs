//! Point masses and their per-frame update phases.
//!
//! A particle's update runs in a fixed order: obstacle-blocked move, damping,
//! gravity, boundary bounce, boundary clamp, NaN repair, then the pairwise
//! pass against every other particle (driven by [`World`](crate::World),
//! which owns the particle array).

use crate::bounds::Bounds;
use crate::config::WorldConfig;
use crate::error::{Axis, PhysicsError};
use crate::float::Float;
use crate::id::{ParticleId, ShapeId};
use crate::obstacle::Obstacle;
use crate::observer::StepObserver;
use crate::vec::Vec2;

/// Which shape a particle belongs to and its index inside that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Membership {
    pub shape: ShapeId,
    pub slot: usize,
}

/// A point mass with an explicit velocity.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    id: ParticleId,
    pos: Vec2<F>,
    vel: Vec2<F>,
    mass: F,
    radius: F,
    hardness: F,
    membership: Option<Membership>,
}

impl<F: Float> Particle<F> {
    /// Free particle at rest with mass 1, radius 25 and hardness 1.
    pub fn new(x: F, y: F) -> Self {
        Particle {
            id: ParticleId::next(),
            pos: Vec2::new(x, y),
            vel: Vec2::zero(),
            mass: F::one(),
            radius: F::from_f64(25.0),
            hardness: F::one(),
            membership: None,
        }
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    /// Stiffness multiplier for springs to the rest of the shape.
    pub fn with_hardness(mut self, hardness: F) -> Self {
        self.hardness = hardness;
        self
    }

    pub fn with_velocity(mut self, vx: F, vy: F) -> Self {
        self.vel = Vec2::new(vx, vy);
        self
    }

    pub(crate) fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = Some(membership);
        self
    }

    /// Check the mass and radius invariants.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.mass > F::zero() && self.mass.is_finite()) {
            return Err(PhysicsError::InvalidMass);
        }
        if !(self.radius > F::zero() && self.radius.is_finite()) {
            return Err(PhysicsError::InvalidRadius);
        }
        Ok(())
    }

    pub fn id(&self) -> ParticleId { self.id }
    pub fn position(&self) -> Vec2<F> { self.pos }
    pub fn velocity(&self) -> Vec2<F> { self.vel }
    pub fn mass(&self) -> F { self.mass }
    pub fn radius(&self) -> F { self.radius }
    pub fn hardness(&self) -> F { self.hardness }
    pub fn membership(&self) -> Option<Membership> { self.membership }

    pub fn shape(&self) -> Option<ShapeId> {
        self.membership.map(|m| m.shape)
    }

    pub(crate) fn set_slot(&mut self, slot: usize) {
        if let Some(m) = self.membership.as_mut() {
            m.slot = slot;
        }
    }

    pub(crate) fn clear_membership(&mut self) {
        self.membership = None;
    }

    /// Set the position. A NaN axis is rejected and keeps its old value; the
    /// other axis still applies.
    pub fn set_position(&mut self, x: F, y: F) -> Result<(), PhysicsError> {
        let (x_bad, y_bad) = (x.is_nan(), y.is_nan());
        if !x_bad {
            self.pos.x = x;
        }
        if !y_bad {
            self.pos.y = y;
        }
        match Axis::from_flags(x_bad, y_bad) {
            None => Ok(()),
            Some(axis) => Err(PhysicsError::NotANumber { setter: "Particle::set_position", axis }),
        }
    }

    /// Set the velocity with the same per-axis NaN rejection as [`Particle::set_position`].
    pub fn set_velocity(&mut self, x: F, y: F) -> Result<(), PhysicsError> {
        let (x_bad, y_bad) = (x.is_nan(), y.is_nan());
        if !x_bad {
            self.vel.x = x;
        }
        if !y_bad {
            self.vel.y = y;
        }
        match Axis::from_flags(x_bad, y_bad) {
            None => Ok(()),
            Some(axis) => Err(PhysicsError::NotANumber { setter: "Particle::set_velocity", axis }),
        }
    }

    /// Shape tags match. Two free particles share the "no shape" tag, so
    /// they count as one body for repulsion (they still get no spring).
    fn same_shape(&self, other: &Particle<F>) -> bool {
        self.shape() == other.shape()
    }

    /// Phases 1 to 6 of the update: everything that needs only this particle,
    /// the obstacles and the bounds.
    pub fn integrate<O: StepObserver>(
        &mut self,
        obstacles: &[Obstacle<F>],
        bounds: &Bounds<F>,
        config: &WorldConfig<F>,
        observer: &mut O,
    ) {
        self.move_blocked(obstacles, config, observer);

        self.vel = self.vel.scale(config.damping);
        self.vel.y = self.vel.y + config.gravity_scale * self.mass;

        let half = self.radius * F::half();
        let bounce = -config.bound_restitution;
        if bounds.crosses_x(self.pos.x, half) {
            self.vel.x = self.vel.x * bounce;
            observer.on_boundary_bounce(self.id, Axis::X);
        }
        if bounds.crosses_y(self.pos.y, half) {
            self.vel.y = self.vel.y * bounce;
            observer.on_boundary_bounce(self.id, Axis::Y);
        }

        self.pos = bounds.clamp(self.pos, half);

        if self.sanitize(bounds) {
            observer.on_sanitized(self.id);
        }
    }

    /// Move by the velocity, one axis at a time.
    ///
    /// Each axis is tested with the other coordinate still at its old value,
    /// so an obstacle corner can block both axes in the same step. A blocked
    /// axis keeps its position and has its velocity reversed.
    fn move_blocked<O: StepObserver>(
        &mut self,
        obstacles: &[Obstacle<F>],
        config: &WorldConfig<F>,
        observer: &mut O,
    ) {
        let next = self.pos + self.vel;
        let half = self.radius * F::half();
        let mut free_x = true;
        let mut free_y = true;
        for o in obstacles {
            if o.blocks(Vec2::new(next.x, self.pos.y), half) {
                free_x = false;
            }
            if o.blocks(Vec2::new(self.pos.x, next.y), half) {
                free_y = false;
            }
        }

        let flip = -config.obstacle_restitution;
        if free_x {
            self.pos.x = next.x;
        } else {
            self.vel.x = self.vel.x * flip;
            observer.on_obstacle_blocked(self.id, Axis::X);
        }
        if free_y {
            self.pos.y = next.y;
        } else {
            self.vel.y = self.vel.y * flip;
            observer.on_obstacle_blocked(self.id, Axis::Y);
        }
    }

    /// Reset NaN components: position to the bounds' reset point, velocity to 0.
    /// Returns `true` if anything was repaired.
    pub fn sanitize(&mut self, bounds: &Bounds<F>) -> bool {
        if !self.pos.has_nan() && !self.vel.has_nan() {
            return false;
        }
        let reset = bounds.reset_point();
        if self.pos.x.is_nan() {
            self.pos.x = reset.x;
        }
        if self.pos.y.is_nan() {
            self.pos.y = reset.y;
        }
        if self.vel.x.is_nan() {
            self.vel.x = F::zero();
        }
        if self.vel.y.is_nan() {
            self.vel.y = F::zero();
        }
        true
    }

    /// Velocity change the spring towards `other` would apply to this particle.
    ///
    /// Zero when `rest` is zero (no spring), when the pair sits exactly at
    /// its rest distance, or when the two points coincide. Each axis is attenuated by `1 / (1 + |delta|)`.
    pub fn spring_impulse(&self, other: Vec2<F>, rest: F, config: &WorldConfig<F>) -> Vec2<F> {
        if rest == F::zero() {
            return Vec2::zero();
        }
        let delta = other - self.pos;
        let d = delta.length();
        if !(d > F::zero()) {
            return Vec2::zero();
        }
        let fc = (d - rest) * self.hardness;
        let force = fc - fc / config.spring_softening;
        if force.is_nan() {
            return Vec2::zero();
        }
        let one = F::one();
        Vec2::new(
            force / (one + delta.x.abs()) / self.mass * delta.x / d,
            force / (one + delta.y.abs()) / self.mass * delta.y / d,
        )
    }

    /// Pairwise phase against one other particle.
    ///
    /// Applies the spring for shape-mates (`rest` from the shape's table) and,
    /// for particles of different bodies closer than this particle's radius,
    /// pushes this particle's position out of the overlap, nudges `other`'s
    /// velocity and damps this particle's velocity. Returns `true` when the
    /// repulsion fired.
    ///
    /// Coincident particles (`d == 0`) have no direction to push along and
    /// are left alone, so neither side picks up NaN.
    pub fn interact(&mut self, other: &mut Particle<F>, rest: F, config: &WorldConfig<F>) -> bool {
        let impulse = self.spring_impulse(other.pos, rest, config);
        self.vel += impulse;

        let delta = other.pos - self.pos;
        let d = delta.length();
        if self.same_shape(other) || !(d < self.radius) || !(d > F::zero()) {
            return false;
        }

        let one = F::one();
        let am = (self.radius - d) * config.repulsion_scale * self.mass;
        self.pos.x = self.pos.x - am / (one + delta.x.abs()) / self.mass * delta.x / d;
        self.pos.y = self.pos.y - am / (one + delta.y.abs()) / self.mass * delta.y / d;

        let reaction = am * config.reaction_scale * self.mass;
        let rel_x = (self.vel.x - other.vel.x).abs().min(one);
        let rel_y = (self.vel.y - other.vel.y).abs().min(one);
        other.vel.x = other.vel.x
            + reaction * rel_x / other.mass / (one + delta.x.abs()) / other.mass * delta.x / d;
        other.vel.y = other.vel.y
            + reaction * rel_y / other.mass / (one + delta.y.abs()) / other.mass * delta.y / d;

        self.vel = self.vel.scale(config.contact_damping);
        true
    }

    /// Close out the update after the pairwise pass: repair NaN picked up
    /// there (infinite inputs), then clamp back inside the bounds. Returns `true` if
    /// anything was repaired.
    pub fn contain(&mut self, bounds: &Bounds<F>) -> bool {
        let repaired = self.sanitize(bounds);
        self.pos = bounds.clamp(self.pos, self.radius * F::half());
        repaired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_gravity() -> WorldConfig<f64> {
        WorldConfig::new().with_gravity_scale(0.0)
    }

    #[test]
    fn integrate_damps_then_applies_gravity() {
        let mut p = Particle::new(0.0f64, 0.0).with_mass(2.0).with_velocity(1.0, 1.0);
        let bounds = Bounds::unbounded();
        p.integrate(&[], &bounds, &WorldConfig::new(), &mut crate::NoOpStepObserver);
        assert!((p.velocity().x - 0.98).abs() < 1e-12);
        assert!((p.velocity().y - (0.98 + 0.4)).abs() < 1e-12);
        assert_eq!(p.position(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn spring_pulls_stretched_pair_together() {
        let p = Particle::new(0.0f64, 0.0).with_hardness(1.0);
        let impulse = p.spring_impulse(Vec2::new(20.0, 0.0), 10.0, &no_gravity());
        assert!(impulse.x > 0.0, "stretched spring pulls toward partner");
        assert_eq!(impulse.y, 0.0);
        let impulse = p.spring_impulse(Vec2::new(5.0, 0.0), 10.0, &no_gravity());
        assert!(impulse.x < 0.0, "compressed spring pushes away");
    }

    #[test]
    fn coincident_pair_leaves_both_untouched() {
        let shaped = |x: f64| {
            Particle::new(x, 0.0).with_membership(Membership { shape: ShapeId::next(), slot: 0 })
        };
        let mut a = shaped(0.0);
        let mut b = shaped(0.0);
        assert!(!a.interact(&mut b, 0.0, &no_gravity()));
        assert!(!a.position().has_nan() && !a.velocity().has_nan());
        assert!(!b.velocity().has_nan());
        assert_eq!(a.spring_impulse(b.position(), 10.0, &no_gravity()), Vec2::zero());
    }

    #[test]
    fn free_particles_share_the_no_shape_tag() {
        let mut a = Particle::new(0.0f64, 0.0);
        let mut b = Particle::new(10.0f64, 0.0);
        assert!(!a.interact(&mut b, 0.0, &no_gravity()));
        assert_eq!(a.position(), Vec2::new(0.0, 0.0));

        let mut c = Particle::new(10.0f64, 0.0)
            .with_membership(Membership { shape: ShapeId::next(), slot: 0 });
        assert!(a.interact(&mut c, 0.0, &no_gravity()));
        assert!(a.position().x < 0.0);
    }

    #[test]
    fn no_spring_without_rest_length() {
        let p = Particle::new(0.0f64, 0.0);
        assert_eq!(p.spring_impulse(Vec2::new(3.0, 4.0), 0.0, &no_gravity()), Vec2::zero());
    }

    #[test]
    fn sanitize_resets_each_nan_component() {
        let mut p = Particle::new(7.0f32, 8.0);
        p.pos.x = f32::NAN;
        p.vel.y = f32::NAN;
        p.vel.x = 3.0;
        let bounds = Bounds::from_corners(-10.0, -20.0, 10.0, 20.0);
        assert!(p.sanitize(&bounds));
        assert_eq!(p.position(), Vec2::new(-10.0, 8.0));
        assert_eq!(p.velocity(), Vec2::new(3.0, 0.0));
        assert!(!p.sanitize(&bounds));
    }

    #[test]
    fn set_velocity_rejects_nan_axis() {
        let mut p = Particle::new(0.0f32, 0.0).with_velocity(1.0, 2.0);
        let err = p.set_velocity(4.0, f32::NAN).unwrap_err();
        assert_eq!(err, PhysicsError::NotANumber { setter: "Particle::set_velocity", axis: Axis::Y });
        assert_eq!(p.velocity(), Vec2::new(4.0, 2.0));
    }

    #[test]
    fn validate_rejects_bad_mass_and_radius() {
        assert_eq!(Particle::new(0.0f32, 0.0).with_mass(0.0).validate(), Err(PhysicsError::InvalidMass));
        assert_eq!(
            Particle::new(0.0f32, 0.0).with_radius(f32::INFINITY).validate(),
            Err(PhysicsError::InvalidRadius)
        );
        assert!(Particle::new(0.0f32, 0.0).validate().is_ok());
    }
}
