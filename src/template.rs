//! Shape templates: build fully connected soft bodies and obstacles.

use crate::composite::Composite;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::geometry::point_at_angle;
use crate::id::ShapeId;
use crate::obstacle::Obstacle;
use crate::particle::{Membership, Particle};
use crate::shape::{Color, RestTable, Shape};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Per-particle material shared by every member of a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material<F: Float> {
    pub mass: F,
    pub hardness: F,
    pub particle_radius: F,
}

impl<F: Float> Default for Material<F> {
    fn default() -> Self {
        Material {
            mass: F::one(),
            hardness: F::one(),
            particle_radius: F::from_f64(25.0),
        }
    }
}

/// Configuration for a circular blob.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobConfig<F: Float> {
    pub center: Vec2<F>,
    /// Distance of each particle from the centre.
    pub radius: F,
    pub points: usize,
    pub material: Material<F>,
    pub color: Option<Color>,
}

/// Configuration for a rectangle walked along its perimeter.
#[derive(Debug, Clone, PartialEq)]
pub struct RectConfig<F: Float> {
    /// Top-left corner.
    pub origin: Vec2<F>,
    /// Cells along x.
    pub columns: usize,
    /// Cells along y.
    pub rows: usize,
    /// Cell size on each axis.
    pub spacing: Vec2<F>,
    pub material: Material<F>,
    pub color: Option<Color>,
}

/// `points` particles evenly spaced on a circle around `center`.
///
/// Point `i` sits at `i * 360 / points` degrees, the first one straight below
/// the centre (+y).
pub fn blob<F: Float>(config: &BlobConfig<F>) -> Result<Composite<F>, PhysicsError> {
    if config.points == 0 {
        return Err(PhysicsError::InsufficientPoints);
    }
    let step = F::from_f64(360.0) / F::from_f64(config.points as f64);
    let positions: AllocVec<Vec2<F>> = (0..config.points)
        .map(|i| point_at_angle(config.center, F::from_f64(i as f64) * step, config.radius))
        .collect();
    connect(&positions, &config.material, config.color)
}

/// Particles on the outline of a `columns × rows` grid of cells.
///
/// The walk goes top edge left to right, right edge top to bottom, bottom edge
/// right to left and left edge bottom to top, so consecutive slots trace the
/// outline and every corner appears once.
pub fn rectangle<F: Float>(config: &RectConfig<F>) -> Result<Composite<F>, PhysicsError> {
    if config.columns == 0 || config.rows == 0 {
        return Err(PhysicsError::InvalidGridDimensions);
    }
    let (cols, rows) = (config.columns, config.rows);
    let at = |col: usize, row: usize| {
        Vec2::new(
            config.origin.x + F::from_f64(col as f64) * config.spacing.x,
            config.origin.y + F::from_f64(row as f64) * config.spacing.y,
        )
    };

    let mut positions = AllocVec::with_capacity(2 * (cols + rows));
    for col in 0..cols {
        positions.push(at(col, 0));
    }
    for row in 0..rows {
        positions.push(at(cols, row));
    }
    for col in (1..=cols).rev() {
        positions.push(at(col, rows));
    }
    for row in (1..=rows).rev() {
        positions.push(at(0, row));
    }
    connect(&positions, &config.material, config.color)
}

/// A composite holding a single obstacle and nothing else.
pub fn obstacle<F: Float>(x: F, y: F, width: F, height: F) -> Composite<F> {
    Composite::from_obstacle(Obstacle::new(x, y, width, height))
}

/// One shape over `positions` with every pair connected by its current distance.
fn connect<F: Float>(
    positions: &[Vec2<F>],
    material: &Material<F>,
    color: Option<Color>,
) -> Result<Composite<F>, PhysicsError> {
    let shape = ShapeId::next();
    let particles = positions
        .iter()
        .enumerate()
        .map(|(slot, pos)| {
            let p = Particle::new(pos.x, pos.y)
                .with_mass(material.mass)
                .with_hardness(material.hardness)
                .with_radius(material.particle_radius)
                .with_membership(Membership { shape, slot });
            p.validate().map(|_| p)
        })
        .collect::<Result<AllocVec<_>, _>>()?;

    let members = particles.iter().map(|p| p.id()).collect();
    let rest = RestTable::from_positions(positions);
    let mut composite = Composite::new();
    composite.shapes.push(Shape::new(shape, members, rest, color));
    composite.particles = particles;
    Ok(composite)
}
