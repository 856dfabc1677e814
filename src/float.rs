//! Floating-point abstraction over the representations a spring can use.

use core::cmp::PartialOrd;
use core::ops::{Add, Mul, Neg, Sub};

/// Trait abstracting the floating-point operations the integrator needs.
///
/// Implemented for `f32` and `f64`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Machine epsilon for this representation.
    ///
    /// Used directly as a *squared* distance threshold when a spring is
    /// built without an explicit precision.
    fn epsilon() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// True unless NaN or infinite.
    fn is_finite(self) -> bool;

    /// Square of self.
    fn squared(self) -> Self {
        self * self
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn epsilon() -> Self { f32::EPSILON }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn epsilon() -> Self { f64::EPSILON }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_matches_std() {
        assert_eq!(<f32 as Float>::epsilon(), f32::EPSILON);
        assert_eq!(<f64 as Float>::epsilon(), f64::EPSILON);
    }

    #[test]
    fn finiteness() {
        assert!(Float::is_finite(1.5f32));
        assert!(!Float::is_finite(f32::NAN));
        assert!(!Float::is_finite(f64::INFINITY));
        assert!(!Float::is_finite(f64::NEG_INFINITY));
    }

    #[test]
    fn sqrt_and_squared() {
        assert!((Float::sqrt(16.0f64) - 4.0).abs() < 1e-12);
        assert_eq!(Float::squared(0.5f32), 0.25);
    }
}
