//! Floating-point abstraction so the simulation runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Floating-point operations needed by the simulation.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Positive infinity.
    fn infinity() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine (radians).
    fn sin(self) -> Self;
    /// Cosine (radians).
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Arctangent of y/x, with correct quadrant.
    fn atan2(y: Self, x: Self) -> Self;
    /// Floating-point remainder with the sign of `self`.
    fn rem(self, rhs: Self) -> Self;
    /// Convert from f64 (for constants and configuration).
    fn from_f64(v: f64) -> Self;

    /// `true` for NaN.
    fn is_nan(self) -> bool;

    /// `true` unless NaN or infinite.
    fn is_finite(self) -> bool {
        !self.is_nan() && self.abs() != Self::infinity()
    }

    /// Minimum of two values. Returns `other` when `self` is NaN.
    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    /// Maximum of two values. Returns `other` when `self` is NaN.
    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    /// Degrees to radians.
    fn to_radians(self) -> Self {
        self * Self::pi() / Self::from_f64(180.0)
    }

    /// Radians to degrees.
    fn to_degrees(self) -> Self {
        self * Self::from_f64(180.0) / Self::pi()
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn pi() -> Self { core::f32::consts::PI }
    fn infinity() -> Self { f32::INFINITY }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2f(y, x) }
    fn rem(self, rhs: Self) -> Self { libm::fmodf(self, rhs) }
    fn is_nan(self) -> bool { f32::is_nan(self) }
    fn from_f64(v: f64) -> Self { v as f32 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn pi() -> Self { core::f64::consts::PI }
    fn infinity() -> Self { f64::INFINITY }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2(y, x) }
    fn rem(self, rhs: Self) -> Self { libm::fmod(self, rhs) }
    fn is_nan(self) -> bool { f64::is_nan(self) }
    fn from_f64(v: f64) -> Self { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_and_infinity_classification() {
        assert!(Float::is_nan(f32::NAN));
        assert!(!Float::is_nan(1.0f32));
        assert!(!Float::is_finite(f64::INFINITY));
        assert!(!Float::is_finite(-f64::INFINITY));
        assert!(Float::is_finite(-3.5f64));
    }

    #[test]
    fn max_skips_nan_receiver() {
        assert_eq!(Float::max(f32::NAN, 2.0), 2.0);
        assert_eq!(Float::min(1.0f32, 2.0), 1.0);
    }

    #[test]
    fn degree_conversion() {
        let r = Float::to_radians(180.0f64);
        assert!((r - core::f64::consts::PI).abs() < 1e-12);
        assert!((Float::to_degrees(r) - 180.0).abs() < 1e-9);
    }
}
