//! Static axis-aligned obstacles.

use crate::float::Float;
use crate::geometry::{circle_in_rect, Rect};
use crate::vec::Vec2;

/// Immutable rectangle that blocks particle movement. It exerts no force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle<F: Float> {
    rect: Rect<F>,
}

impl<F: Float> Obstacle<F> {
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Obstacle { rect: Rect::new(x, y, width, height) }
    }

    pub fn rect(&self) -> &Rect<F> {
        &self.rect
    }

    /// Does a particle collision circle at `center` overlap this obstacle?
    pub fn blocks(&self, center: Vec2<F>, radius: F) -> bool {
        circle_in_rect(center, radius, &self.rect)
    }
}
