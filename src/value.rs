//! Spring arity and the tagged values passed in and out of a spring.

use crate::error::{InvalidValueReason, SpringError};
use crate::float::Float;
use crate::vec::Lanes;
use core::fmt;

/// The shape of the quantity a spring animates. Fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
}

impl Arity {
    /// Number of live components (1 to 4).
    pub fn len(self) -> usize {
        match self {
            Arity::Scalar => 1,
            Arity::Vec2 => 2,
            Arity::Vec3 => 3,
            Arity::Vec4 => 4,
        }
    }

    /// Vector arity for a sequence length. Only 2, 3 and 4 map to an arity;
    /// a one-element sequence is not a scalar.
    pub fn from_len(len: usize) -> Option<Arity> {
        match len {
            2 => Some(Arity::Vec2),
            3 => Some(Arity::Vec3),
            4 => Some(Arity::Vec4),
            _ => None,
        }
    }

    pub fn is_scalar(self) -> bool {
        self == Arity::Scalar
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Scalar => write!(f, "scalar"),
            other => write!(f, "vector of length {}", other.len()),
        }
    }
}

/// A scalar or a 2 to 4 component vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value<F: Float> {
    Scalar(F),
    Vec2([F; 2]),
    Vec3([F; 3]),
    Vec4([F; 4]),
}

impl<F: Float> Value<F> {
    pub fn arity(&self) -> Arity {
        match self {
            Value::Scalar(_) => Arity::Scalar,
            Value::Vec2(_) => Arity::Vec2,
            Value::Vec3(_) => Arity::Vec3,
            Value::Vec4(_) => Arity::Vec4,
        }
    }

    /// The live components, in order.
    pub fn components(&self) -> &[F] {
        match self {
            Value::Scalar(x) => core::slice::from_ref(x),
            Value::Vec2(v) => v,
            Value::Vec3(v) => v,
            Value::Vec4(v) => v,
        }
    }

    pub fn as_scalar(&self) -> Option<F> {
        match self {
            Value::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.components().iter().all(|c| c.is_finite())
    }

    /// Zero-padded 4-slot form.
    pub(crate) fn to_lanes(self) -> Lanes<F> {
        Lanes::from_slice(self.components())
    }

    /// Read the first `arity.len()` slots of `lanes` back out.
    pub(crate) fn from_lanes(arity: Arity, lanes: Lanes<F>) -> Self {
        let [a, b, c, d] = lanes.0;
        match arity {
            Arity::Scalar => Value::Scalar(a),
            Arity::Vec2 => Value::Vec2([a, b]),
            Arity::Vec3 => Value::Vec3([a, b, c]),
            Arity::Vec4 => Value::Vec4([a, b, c, d]),
        }
    }
}

impl<F: Float> From<F> for Value<F> {
    fn from(x: F) -> Self {
        Value::Scalar(x)
    }
}

impl<F: Float> From<[F; 2]> for Value<F> {
    fn from(v: [F; 2]) -> Self {
        Value::Vec2(v)
    }
}

impl<F: Float> From<[F; 3]> for Value<F> {
    fn from(v: [F; 3]) -> Self {
        Value::Vec3(v)
    }
}

impl<F: Float> From<[F; 4]> for Value<F> {
    fn from(v: [F; 4]) -> Self {
        Value::Vec4(v)
    }
}

/// Runtime-length sequences. Accepts 2 to 4 components only; finiteness is
/// checked where the value is consumed, not here.
impl<F: Float> TryFrom<&[F]> for Value<F> {
    type Error = SpringError;

    fn try_from(src: &[F]) -> Result<Self, Self::Error> {
        match *src {
            [] => Err(InvalidValueReason::EmptySequence.into()),
            [_] => Err(InvalidValueReason::TooShort { len: 1 }.into()),
            [a, b] => Ok(Value::Vec2([a, b])),
            [a, b, c] => Ok(Value::Vec3([a, b, c])),
            [a, b, c, d] => Ok(Value::Vec4([a, b, c, d])),
            _ => Err(InvalidValueReason::TooLong { len: src.len() }.into()),
        }
    }
}
