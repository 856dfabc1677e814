//! Damped spring interpolation toward a moving target.
//!
//! `settle` animates a scalar or a 2 to 4 component vector toward a
//! destination that may change at any time. Each call to
//! [`Spring::tick`] advances the spring by one fixed step, so it is meant to
//! be driven once per frame by whatever loop owns the timing.
//!
//! # Features
//!
//! - **Semi-implicit Euler**: velocity is updated before position each step
//! - **Implicit velocity**: derived from the previous value, never stored
//! - **Snap to rest**: once within precision the spring lands exactly on its
//!   destination and stays there
//! - **Fixed arity**: scalar or vector shape is chosen at construction and
//!   enforced on every retarget
//! - **Observable**: monitor ticks via the `TickObserver` trait
//! - **`no_std` compatible**: no allocation, works in embedded and WASM
//!   environments
//!
//! # Example
//!
//! ```
//! use settle::{Spring, Value};
//!
//! let mut zoom: Spring<f32> = Spring::with_precision(0.1, 0.7, 1.0, 0.001).unwrap();
//! zoom.set_destination(2.0).unwrap();
//! while !zoom.is_at_destination() {
//!     zoom.tick();
//! }
//! assert_eq!(zoom.current_value(), Value::Scalar(2.0));
//! ```

#![no_std]

pub mod float;
pub mod vec;
pub mod value;
pub mod spring;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Lanes;
pub use value::{Arity, Value};
pub use spring::{Spring, Spring32, Spring64};
pub use config::{SpringConfig, TickOverrides};
pub use observer::{TickObserver, TickReport, NoOpTickObserver};
pub use error::{SpringError, InvalidValueReason};
