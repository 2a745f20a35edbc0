//! World bounding box.

use crate::float::Float;
use crate::vec::Vec2;

/// Rectangle particles are kept inside, stored as min/max corners.
///
/// The default box is unbounded (±infinity on both axes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Bounds<F> {
    pub fn unbounded() -> Self {
        let inf = F::infinity();
        Bounds { min: Vec2::new(-inf, -inf), max: Vec2::new(inf, inf) }
    }

    /// Box spanned by two corners, taken as given.
    ///
    /// Inverted corners are not swapped; see [`Bounds::clamp_axis`] for how
    /// an empty interval behaves.
    pub fn from_corners(x1: F, y1: F, x2: F, y2: F) -> Self {
        Bounds { min: Vec2::new(x1, y1), max: Vec2::new(x2, y2) }
    }

    pub fn x(&self) -> F { self.min.x }
    pub fn y(&self) -> F { self.min.y }
    pub fn width(&self) -> F { self.max.x - self.min.x }
    pub fn height(&self) -> F { self.max.y - self.min.y }

    pub fn is_unbounded(&self) -> bool {
        !self.min.x.is_finite() && !self.min.y.is_finite()
            && !self.max.x.is_finite() && !self.max.y.is_finite()
    }

    /// Would a circle of `half` extent at `p` cross the left or right edge?
    pub fn crosses_x(&self, p: F, half: F) -> bool {
        p - half < self.min.x || p + half > self.max.x
    }

    /// Would a circle of `half` extent at `p` cross the top or bottom edge?
    pub fn crosses_y(&self, p: F, half: F) -> bool {
        p - half < self.min.y || p + half > self.max.y
    }

    /// Clamp a centre coordinate into `[lo + half, hi - half]`.
    ///
    /// The lower edge is applied first and the upper edge second, so when the
    /// interval is empty (box narrower than the circle, or inverted corners)
    /// the result is `hi - half`. NaN is passed through untouched.
    pub fn clamp_axis(v: F, lo: F, hi: F, half: F) -> F {
        let lo = lo + half;
        let hi = hi - half;
        let v = if v < lo { lo } else { v };
        if v > hi { hi } else { v }
    }

    /// Clamp a particle centre so its circle of `half` extent stays inside.
    pub fn clamp(&self, p: Vec2<F>, half: F) -> Vec2<F> {
        Vec2::new(
            Self::clamp_axis(p.x, self.min.x, self.max.x, half),
            Self::clamp_axis(p.y, self.min.y, self.max.y, half),
        )
    }

    /// Where a diverged coordinate is reset to: the top-left corner, or the
    /// origin on axes without a finite edge.
    pub fn reset_point(&self) -> Vec2<F> {
        let pick = |v: F| if v.is_finite() { v } else { F::zero() };
        Vec2::new(pick(self.min.x), pick(self.min.y))
    }
}

impl<F: Float> Default for Bounds<F> {
    fn default() -> Self {
        Self::unbounded()
    }
}
