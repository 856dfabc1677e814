//! Tick observer trait for monitoring spring steps.

use crate::float::Float;
use crate::value::Value;

/// What a single tick computed, before any snap to rest.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport<F: Float> {
    /// Velocity after the acceleration was applied.
    pub velocity: Value<F>,
    /// Spring force plus damper force.
    pub acceleration: Value<F>,
    /// Position after integration.
    pub value: Value<F>,
}

/// Trait for observing spring ticks.
///
/// Implement this to trace a spring (e.g. for debugging or plotting a
/// response curve). All methods have default no-op implementations.
pub trait TickObserver<F: Float> {
    /// Called after velocity and position have been integrated.
    fn on_step(&mut self, _report: &TickReport<F>) {}

    /// Called when the spring came within precision and was snapped onto
    /// its destination.
    fn on_settle(&mut self, _destination: &Value<F>) {}
}

/// A no-op observer. Use when no observation is needed.
pub struct NoOpTickObserver;

impl<F: Float> TickObserver<F> for NoOpTickObserver {}
