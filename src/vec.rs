//! Fixed-width component buffers and the arithmetic the integrator runs on.

use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// Number of slots every [`Lanes`] buffer carries.
pub const LANES: usize = 4;

/// A 4-slot component buffer.
///
/// Every spring stores its state in `Lanes` regardless of arity; slots past
/// the arity stay zero, so componentwise arithmetic over all four slots
/// never disturbs them (`0 - 0`, `0 * s`, `0 + 0`).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Lanes<F: Float>(pub [F; LANES]);

impl<F: Float> Lanes<F> {
    /// All slots zero.
    pub fn zero() -> Self {
        Lanes([F::zero(); LANES])
    }

    /// Copy `src` into the leading slots, zero-padding the rest.
    ///
    /// `src` longer than [`LANES`] is truncated.
    pub fn from_slice(src: &[F]) -> Self {
        let mut lanes = Self::zero();
        for (slot, &c) in lanes.0.iter_mut().zip(src) {
            *slot = c;
        }
        lanes
    }

    /// Copy the first `len` slots into `out` and return it.
    ///
    /// Slots of `out` at or beyond `len` are left untouched. Panics if
    /// `out` is shorter than `len`.
    pub fn copy_to<'a>(&self, out: &'a mut [F], len: usize) -> &'a mut [F] {
        out[..len].copy_from_slice(&self.0[..len]);
        out
    }

    /// Scale all slots by a scalar.
    pub fn scale(self, s: F) -> Self {
        let [a, b, c, d] = self.0;
        Lanes([a * s, b * s, c * s, d * s])
    }

    /// Dot product over all four slots.
    pub fn dot(self, other: Self) -> F {
        let [a, b, c, d] = self.0;
        let [x, y, z, w] = other.0;
        a * x + b * y + c * z + d * w
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        self.distance_sq(other).sqrt()
    }

    /// True if every slot is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl<F: Float> Add for Lanes<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let [a, b, c, d] = self.0;
        let [x, y, z, w] = rhs.0;
        Lanes([a + x, b + y, c + z, d + w])
    }
}

impl<F: Float> Sub for Lanes<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let [a, b, c, d] = self.0;
        let [x, y, z, w] = rhs.0;
        Lanes([a - x, b - y, c - z, d - w])
    }
}

impl<F: Float> Neg for Lanes<F> {
    type Output = Self;
    fn neg(self) -> Self {
        let [a, b, c, d] = self.0;
        Lanes([-a, -b, -c, -d])
    }
}

impl<F: Float> From<[F; LANES]> for Lanes<F> {
    fn from(slots: [F; LANES]) -> Self {
        Lanes(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_zero_pads() {
        let l = Lanes::from_slice(&[1.0f32, 2.0]);
        assert_eq!(l, Lanes([1.0, 2.0, 0.0, 0.0]));
    }

    #[test]
    fn copy_to_leaves_tail_alone() {
        let l = Lanes([1.0f32, 2.0, 3.0, 4.0]);
        let mut out = [9.0f32; 4];
        l.copy_to(&mut out, 2);
        assert_eq!(out, [1.0, 2.0, 9.0, 9.0]);
    }

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Lanes([1.0f64, 2.0, 3.0, 0.0]);
        let b = Lanes([0.5f64, -1.0, 4.0, 0.0]);
        assert_eq!(a + b, Lanes([1.5, 1.0, 7.0, 0.0]));
        assert_eq!(a - b, Lanes([0.5, 3.0, -1.0, 0.0]));
        assert_eq!(a.scale(2.0), Lanes([2.0, 4.0, 6.0, 0.0]));
        assert_eq!(-a, Lanes([-1.0, -2.0, -3.0, -0.0]));
    }

    #[test]
    fn dot_product() {
        let a = Lanes([1.0f32, 2.0, 3.0, 4.0]);
        let b = Lanes([4.0f32, 3.0, 2.0, 1.0]);
        assert_eq!(a.dot(b), 20.0);
    }

    #[test]
    fn distance_calculation() {
        let a = Lanes::<f32>::zero();
        let b = Lanes([3.0f32, 4.0, 0.0, 0.0]);
        assert_eq!(a.distance_sq(b), 25.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn finiteness_checks_every_slot() {
        assert!(Lanes([1.0f32, 2.0, 3.0, 4.0]).is_finite());
        assert!(!Lanes([1.0f32, 2.0, f32::NAN, 4.0]).is_finite());
    }
}
