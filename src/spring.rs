//! Discrete damped springs advanced one unit step per tick.
//!
//! ```
//! use settle::Spring;
//!
//! let mut spring: Spring<f64> = Spring::new(0.2, 0.4, [0.0, 0.0, 0.0]).unwrap();
//! spring.set_destination([10.0, 10.0, 10.0]).unwrap();
//! let value = spring.tick();
//! assert_eq!(value.components(), &[2.0, 2.0, 2.0]);
//! ```

use crate::config::{SpringConfig, TickOverrides};
use crate::error::{InvalidValueReason, SpringError};
use crate::float::Float;
use crate::observer::{NoOpTickObserver, TickObserver, TickReport};
use crate::value::{Arity, Value};
use crate::vec::Lanes;

/// A value pulled toward a destination by a damped spring.
///
/// Velocity is never stored: it is the difference between the current value
/// and the value one tick earlier. Slots past the arity are always zero.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    arity: Arity,
    stiffness: F,
    dampening: F,
    /// Squared convergence distance.
    precision: F,
    value: Lanes<F>,
    last_value: Lanes<F>,
    destination: Lanes<F>,
}

impl<F: Float> Spring<F> {
    /// Build a spring at rest at `initial`, using the float type's epsilon
    /// as the convergence threshold.
    pub fn new(stiffness: F, dampening: F, initial: impl Into<Value<F>>) -> Result<Self, SpringError> {
        Self::from_config(&SpringConfig::new(stiffness, dampening), initial)
    }

    /// Build a spring whose convergence distance is `precision`.
    pub fn with_precision(
        stiffness: F,
        dampening: F,
        initial: impl Into<Value<F>>,
        precision: F,
    ) -> Result<Self, SpringError> {
        let config = SpringConfig::new(stiffness, dampening).with_precision(precision);
        Self::from_config(&config, initial)
    }

    pub fn from_config(config: &SpringConfig<F>, initial: impl Into<Value<F>>) -> Result<Self, SpringError> {
        let initial = initial.into();
        if !initial.is_finite() {
            log::debug!("rejecting non-finite initial value {:?}", initial);
            return Err(InvalidValueReason::NonFinite.into());
        }
        let lanes = initial.to_lanes();
        Ok(Spring {
            arity: initial.arity(),
            stiffness: config.stiffness,
            dampening: config.dampening,
            precision: config.squared_precision(),
            value: lanes,
            last_value: lanes,
            destination: lanes,
        })
    }

    /// Retarget the spring. It animates toward the new destination on
    /// subsequent ticks.
    pub fn set_destination(&mut self, destination: impl Into<Value<F>>) -> Result<(), SpringError> {
        self.set_destination_with(destination, true)
    }

    /// Retarget the spring. When `should_animate` is false the spring jumps
    /// straight to the destination and comes to rest there.
    pub fn set_destination_with(
        &mut self,
        destination: impl Into<Value<F>>,
        should_animate: bool,
    ) -> Result<(), SpringError> {
        let destination = destination.into();
        self.check_arity(&destination)?;
        self.destination = destination.to_lanes();
        if !should_animate {
            log::trace!("teleporting spring to {:?}", destination);
            self.value = self.destination;
            self.last_value = self.destination;
        }
        Ok(())
    }

    /// Shorthand for `set_destination_with(destination, false)`.
    pub fn teleport(&mut self, destination: impl Into<Value<F>>) -> Result<(), SpringError> {
        self.set_destination_with(destination, false)
    }

    /// True if the spring is within its stored precision of the destination
    /// and has moved no further than that over the last tick.
    pub fn is_at_destination(&self) -> bool {
        self.within(self.precision)
    }

    /// Like [`is_at_destination`](Self::is_at_destination), with a linear
    /// `threshold` in place of the stored precision.
    pub fn is_at_destination_within(&self, threshold: F) -> bool {
        self.within(threshold.squared())
    }

    fn within(&self, threshold_sq: F) -> bool {
        self.value.distance_sq(self.destination) <= threshold_sq
            && self.value.distance_sq(self.last_value) <= threshold_sq
    }

    pub fn current_value(&self) -> Value<F> {
        Value::from_lanes(self.arity, self.value)
    }

    /// Write the current value into the leading slots of `out`.
    ///
    /// Exactly `arity().len()` slots are written; the rest of `out` is left
    /// alone.
    pub fn current_value_into<'a>(&self, out: &'a mut [F]) -> Result<&'a mut [F], SpringError> {
        self.check_output(out)?;
        Ok(self.value.copy_to(out, self.arity.len()))
    }

    /// Advance one step with the spring's own tunables.
    pub fn tick(&mut self) -> Value<F> {
        self.tick_observed(TickOverrides::none(), &mut NoOpTickObserver)
    }

    /// Advance one step, replacing stiffness and/or dampening for this call
    /// only.
    pub fn tick_with(&mut self, overrides: TickOverrides<F>) -> Value<F> {
        self.tick_observed(overrides, &mut NoOpTickObserver)
    }

    /// Advance one step and write the result into `out`.
    ///
    /// `out` is checked before stepping; if it is too short the spring is
    /// not advanced.
    pub fn tick_into<'a>(
        &mut self,
        out: &'a mut [F],
        overrides: TickOverrides<F>,
    ) -> Result<&'a mut [F], SpringError> {
        self.check_output(out)?;
        self.step(overrides, &mut NoOpTickObserver);
        Ok(self.value.copy_to(out, self.arity.len()))
    }

    /// Advance one step, reporting intermediate state to `observer`.
    pub fn tick_observed<O: TickObserver<F>>(&mut self, overrides: TickOverrides<F>, observer: &mut O) -> Value<F> {
        self.step(overrides, observer);
        self.current_value()
    }

    // Semi-implicit Euler: velocity is updated before it moves the value.
    fn step<O: TickObserver<F>>(&mut self, overrides: TickOverrides<F>, observer: &mut O) {
        let stiffness = overrides.stiffness.unwrap_or(self.stiffness);
        let dampening = overrides.dampening.unwrap_or(self.dampening);

        let mut velocity = self.value - self.last_value;
        let delta = self.destination - self.value;
        let spring_force = delta.scale(stiffness);
        let damper_force = velocity.scale(-dampening);
        let acceleration = spring_force + damper_force;
        velocity = velocity + acceleration;
        let next_value = velocity + self.value;

        self.last_value = self.value;
        self.value = next_value;

        observer.on_step(&TickReport {
            velocity: Value::from_lanes(self.arity, velocity),
            acceleration: Value::from_lanes(self.arity, acceleration),
            value: self.current_value(),
        });

        // Always the stored precision, never an override.
        if self.is_at_destination() {
            self.value = self.destination;
            self.last_value = self.destination;
            log::trace!("spring settled at {:?}", self.destination.0);
            observer.on_settle(&self.destination());
        }
    }

    fn check_arity(&self, value: &Value<F>) -> Result<(), SpringError> {
        let found = value.arity();
        if found != self.arity {
            log::debug!("rejecting {} for a {} spring", found, self.arity);
            return Err(SpringError::ArityMismatch { expected: self.arity, found });
        }
        Ok(())
    }

    fn check_output(&self, out: &[F]) -> Result<(), SpringError> {
        let needed = self.arity.len();
        if out.len() < needed {
            return Err(SpringError::OutputTooShort { needed, len: out.len() });
        }
        Ok(())
    }

    /// Replace the default stiffness and dampening. Not validated.
    pub fn set_tunables(&mut self, stiffness: F, dampening: F) {
        self.stiffness = stiffness;
        self.dampening = dampening;
    }

    pub fn arity(&self) -> Arity { self.arity }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn dampening(&self) -> F { self.dampening }
    /// The stored squared convergence threshold.
    pub fn precision(&self) -> F { self.precision }
    pub fn destination(&self) -> Value<F> { Value::from_lanes(self.arity, self.destination) }

    /// Movement over the last tick.
    pub fn velocity(&self) -> Value<F> {
        Value::from_lanes(self.arity, self.value - self.last_value)
    }
}

pub type Spring32 = Spring<f32>;
pub type Spring64 = Spring<f64>;
