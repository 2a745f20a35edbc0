//! Error types for simulation operations.

use core::fmt;

use crate::id::{ParticleId, ShapeId};

/// Which component of a 2D input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Both,
}

impl Axis {
    /// Axis report for a pair of NaN checks, or `None` when both are valid.
    pub(crate) fn from_flags(x_bad: bool, y_bad: bool) -> Option<Axis> {
        match (x_bad, y_bad) {
            (false, false) => None,
            (true, false) => Some(Axis::X),
            (false, true) => Some(Axis::Y),
            (true, true) => Some(Axis::Both),
        }
    }
}

/// Errors that can occur during simulation operations.
///
/// Every variant is recoverable: the simulation keeps running after any of them.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A setter received NaN. The valid axis was applied, the rejected one kept its value.
    NotANumber { setter: &'static str, axis: Axis },
    /// Mass must be positive and finite.
    InvalidMass,
    /// Particle radius must be positive and finite.
    InvalidRadius,
    /// A blob needs at least one point.
    InsufficientPoints,
    /// A rectangle needs at least one column and one row.
    InvalidGridDimensions,
    /// No particle with this id lives in the world.
    UnknownParticle(ParticleId),
    /// No shape with this id lives in the world.
    UnknownShape(ShapeId),
    /// A particle with this id is already in the world.
    DuplicateParticle(ParticleId),
    /// A shape with this id is already in the world.
    DuplicateShape(ShapeId),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::NotANumber { setter, axis } => match axis {
                Axis::X => write!(f, "{}: first parameter is not a number", setter),
                Axis::Y => write!(f, "{}: second parameter is not a number", setter),
                Axis::Both => write!(f, "{}: both parameters are not numbers", setter),
            },
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidRadius => write!(f, "radius must be positive and finite"),
            PhysicsError::InsufficientPoints => write!(f, "blob needs at least 1 point"),
            PhysicsError::InvalidGridDimensions => write!(f, "rectangle must be at least 1x1"),
            PhysicsError::UnknownParticle(id) => write!(f, "no particle with id {}", id.raw()),
            PhysicsError::UnknownShape(id) => write!(f, "no shape with id {}", id.raw()),
            PhysicsError::DuplicateParticle(id) => write!(f, "particle {} was already added", id.raw()),
            PhysicsError::DuplicateShape(id) => write!(f, "shape {} was already added", id.raw()),
        }
    }
}
