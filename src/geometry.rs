//! Stateless geometry helpers shared by the simulation and the templates.

use crate::float::Float;
use crate::vec::Vec2;

/// Euclidean distance between two points.
pub fn distance<F: Float>(x1: F, y1: F, x2: F, y2: F) -> F {
    Vec2::new(x1, y1).distance(Vec2::new(x2, y2))
}

/// Direction from `from` to `to` in degrees, normalized to `[0, 360)`.
pub fn angle<F: Float>(from: Vec2<F>, to: Vec2<F>) -> F {
    let full = F::from_f64(360.0);
    let deg = F::atan2(to.y - from.y, to.x - from.x).to_degrees();
    (deg + full).rem(full)
}

/// Point `dist` away from `origin` at `degrees`.
///
/// Angle 0 points along +y; angles grow toward +x.
pub fn point_at_angle<F: Float>(origin: Vec2<F>, degrees: F, dist: F) -> Vec2<F> {
    let rad = degrees.to_radians();
    Vec2::new(origin.x + rad.sin() * dist, origin.y + rad.cos() * dist)
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<F: Float> {
    pub x: F,
    pub y: F,
    pub width: F,
    pub height: F,
}

impl<F: Float> Rect<F> {
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Rect { x, y, width, height }
    }

    /// Point inside the rectangle closest to `p`.
    pub fn closest_point(&self, p: Vec2<F>) -> Vec2<F> {
        Vec2::new(
            self.x.max(p.x.min(self.x + self.width)),
            self.y.max(p.y.min(self.y + self.height)),
        )
    }
}

/// Circle-vs-rectangle overlap: clamp the centre to the rectangle and compare
/// squared distances. Touching (distance equal to radius) is not an overlap.
pub fn circle_in_rect<F: Float>(center: Vec2<F>, radius: F, rect: &Rect<F>) -> bool {
    let closest = rect.closest_point(center);
    (center - closest).length_sq() < radius * radius
}

/// Push `p` outward from `center` by `offset` along the centre→point direction.
///
/// Renderers use this so neighbouring blobs draw touching outlines instead of
/// overlapping particle centres. A point sitting on the centre has no
/// direction and is returned unchanged.
pub fn offset_from_center<F: Float>(p: Vec2<F>, center: Vec2<F>, offset: F) -> Vec2<F> {
    let delta = p - center;
    let ds = delta.length();
    if ds.is_near_zero(F::from_f64(1e-10)) {
        return p;
    }
    p + delta.scale(offset / ds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_is_normalized() {
        let o = Vec2::new(0.0f64, 0.0);
        assert!((angle(o, Vec2::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((angle(o, Vec2::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((angle(o, Vec2::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn point_at_angle_quarter_turns() {
        let o = Vec2::new(10.0f64, 10.0);
        let down = point_at_angle(o, 0.0, 5.0);
        assert!((down.x - 10.0).abs() < 1e-9 && (down.y - 15.0).abs() < 1e-9);
        let right = point_at_angle(o, 90.0, 5.0);
        assert!((right.x - 15.0).abs() < 1e-9 && (right.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn circle_overlap_edges() {
        let rect = Rect::new(0.0f32, 0.0, 10.0, 10.0);
        assert!(circle_in_rect(Vec2::new(5.0, 5.0), 1.0, &rect), "centre inside");
        assert!(circle_in_rect(Vec2::new(-0.5, 5.0), 1.0, &rect), "overlapping left edge");
        assert!(!circle_in_rect(Vec2::new(-1.0, 5.0), 1.0, &rect), "touching is not overlap");
        assert!(!circle_in_rect(Vec2::new(11.0, 11.0), 1.0, &rect), "diagonal miss");
    }

    #[test]
    fn offset_pushes_outward() {
        let p = offset_from_center(Vec2::new(3.0f32, 4.0), Vec2::zero(), 5.0);
        assert!((p.x - 6.0).abs() < 1e-5 && (p.y - 8.0).abs() < 1e-5);
        let same = offset_from_center(Vec2::new(1.0f32, 1.0), Vec2::new(1.0, 1.0), 5.0);
        assert_eq!(same, Vec2::new(1.0, 1.0));
    }
}
