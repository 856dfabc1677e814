//! Error types for spring operations.

use crate::value::Arity;
use core::fmt;

/// Why a value was rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidValueReason {
    /// A component is NaN or infinite.
    NonFinite,
    /// The sequence has no components.
    EmptySequence,
    /// A one-element sequence; scalars must be passed as a bare number.
    TooShort { len: usize },
    /// More than four components.
    TooLong { len: usize },
}

/// Errors that can occur when building or driving a spring.
///
/// All of these are caller contract violations. Validation always runs
/// before any state is touched, so a failed call leaves the spring as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum SpringError {
    /// The value is neither a finite scalar nor a finite 2 to 4 component vector.
    InvalidValue { reason: InvalidValueReason },
    /// The value's shape differs from the arity fixed at construction.
    ArityMismatch { expected: Arity, found: Arity },
    /// An output buffer cannot hold the spring's components.
    OutputTooShort { needed: usize, len: usize },
}

impl fmt::Display for InvalidValueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidValueReason::NonFinite => write!(f, "component is not finite"),
            InvalidValueReason::EmptySequence => write!(f, "sequence is empty"),
            InvalidValueReason::TooShort { len } => {
                write!(f, "sequence of length {} is too short (expected 2 to 4)", len)
            }
            InvalidValueReason::TooLong { len } => {
                write!(f, "sequence of length {} is too long (expected 2 to 4)", len)
            }
        }
    }
}

impl fmt::Display for SpringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpringError::InvalidValue { reason } => {
                write!(f, "invalid spring value: {}", reason)
            }
            SpringError::ArityMismatch { expected, found } => {
                write!(f, "expected a {}, got a {}", expected, found)
            }
            SpringError::OutputTooShort { needed, len } => {
                write!(f, "output buffer of length {} cannot hold {} components", len, needed)
            }
        }
    }
}

impl core::error::Error for SpringError {}

impl From<InvalidValueReason> for SpringError {
    fn from(reason: InvalidValueReason) -> Self {
        SpringError::InvalidValue { reason }
    }
}
