//! Shapes: ordered groups of particles that hold together as one soft body.

use crate::float::Float;
use crate::geometry::{distance, offset_from_center};
use crate::id::{ParticleId, ShapeId};
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// RGBA color tag. Only renderers look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }
}

/// Rest distances between every pair of slots in a shape, recorded at
/// construction and never recomputed.
///
/// Stored as a dense `len × len` matrix indexed by shape-local slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RestTable<F: Float> {
    len: usize,
    data: AllocVec<F>,
}

impl<F: Float> RestTable<F> {
    /// Fully connected table from the initial member positions.
    pub fn from_positions(positions: &[Vec2<F>]) -> Self {
        let len = positions.len();
        let mut data = AllocVec::with_capacity(len * len);
        for a in positions {
            for b in positions {
                data.push(distance(a.x, a.y, b.x, b.y));
            }
        }
        RestTable { len, data }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rest distance between two slots; zero on the diagonal or out of range.
    pub fn get(&self, a: usize, b: usize) -> F {
        if a >= self.len || b >= self.len {
            return F::zero();
        }
        self.data[a * self.len + b]
    }

    /// Drop a slot's row and column. Later slots shift down by one.
    pub fn remove(&mut self, slot: usize) {
        if slot >= self.len {
            return;
        }
        let len = self.len;
        let mut kept = 0;
        for i in 0..len * len {
            let (row, col) = (i / len, i % len);
            if row != slot && col != slot {
                self.data[kept] = self.data[i];
                kept += 1;
            }
        }
        self.data.truncate(kept);
        self.len -= 1;
    }
}

/// A soft body: particle ids in slot order plus their rest table.
///
/// Shapes do not own particles; the [`World`](crate::World) does. Use
/// [`World::shape`](crate::World::shape) to get a [`ShapeView`] with positions.
#[derive(Debug, Clone)]
pub struct Shape<F: Float> {
    id: ShapeId,
    members: AllocVec<ParticleId>,
    rest: RestTable<F>,
    color: Option<Color>,
}

impl<F: Float> Shape<F> {
    pub(crate) fn new(
        id: ShapeId,
        members: AllocVec<ParticleId>,
        rest: RestTable<F>,
        color: Option<Color>,
    ) -> Self {
        Shape { id, members, rest, color }
    }

    pub fn id(&self) -> ShapeId { self.id }
    pub fn members(&self) -> &[ParticleId] { &self.members }
    pub fn color(&self) -> Option<Color> { self.color }
    pub fn rest_table(&self) -> &RestTable<F> { &self.rest }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn rest_length(&self, a: usize, b: usize) -> F {
        self.rest.get(a, b)
    }

    /// Remove a member slot from both the member list and the rest table.
    pub(crate) fn remove_slot(&mut self, slot: usize) {
        if slot < self.members.len() {
            self.members.remove(slot);
            self.rest.remove(slot);
        }
    }
}

/// One point of a shape outline, ready to draw as a rounded vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderVertex<F: Float> {
    pub pos: Vec2<F>,
    pub radius: F,
}

/// Read-only view of a shape joined with its particles.
pub struct ShapeView<'w, F: Float> {
    shape: &'w Shape<F>,
    points: AllocVec<&'w Particle<F>>,
}

impl<'w, F: Float> ShapeView<'w, F> {
    pub(crate) fn new(shape: &'w Shape<F>, points: AllocVec<&'w Particle<F>>) -> Self {
        ShapeView { shape, points }
    }

    pub fn shape(&self) -> &'w Shape<F> {
        self.shape
    }

    /// Member particles in slot order.
    pub fn points(&self) -> &[&'w Particle<F>] {
        &self.points
    }

    /// Arithmetic mean of member positions (not mass weighted).
    pub fn middle_point(&self) -> Option<Vec2<F>> {
        if self.points.is_empty() {
            return None;
        }
        let mut sum = Vec2::zero();
        for p in &self.points {
            sum += p.position();
        }
        let n = F::from_f64(self.points.len() as f64);
        Some(sum.scale(F::one() / n))
    }

    /// Outline vertices: every member pushed outward from the middle point by
    /// half its radius, then the first vertex again to close the loop.
    pub fn render_vertices(&self) -> AllocVec<RenderVertex<F>> {
        let center = match self.middle_point() {
            Some(c) => c,
            None => return AllocVec::new(),
        };
        let mut vertices: AllocVec<RenderVertex<F>> = self
            .points
            .iter()
            .map(|p| RenderVertex {
                pos: offset_from_center(p.position(), center, p.radius() * F::half()),
                radius: p.radius(),
            })
            .collect();
        let first = vertices[0];
        vertices.push(first);
        vertices
    }
}
