//! Construction tunables and per-tick overrides.

use crate::float::Float;

/// Tunables captured when a spring is built.
///
/// # Builder Pattern
/// ```
/// use settle::config::SpringConfig;
///
/// let config: SpringConfig<f32> = SpringConfig::new(0.2, 0.4)
///     .with_precision(0.01);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringConfig<F: Float> {
    /// Force constant pulling toward the destination.
    pub stiffness: F,
    /// Friction constant opposing the current velocity.
    pub dampening: F,
    /// Linear convergence distance. Squared when the spring is built.
    /// `None` falls back to the float type's epsilon, used unsquared.
    pub precision: Option<F>,
}

impl<F: Float> SpringConfig<F> {
    pub fn new(stiffness: F, dampening: F) -> Self {
        SpringConfig {
            stiffness,
            dampening,
            precision: None,
        }
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_dampening(mut self, dampening: F) -> Self {
        self.dampening = dampening;
        self
    }

    pub fn with_precision(mut self, precision: F) -> Self {
        self.precision = Some(precision);
        self
    }

    /// The squared threshold a spring built from this config will store.
    pub fn squared_precision(&self) -> F {
        match self.precision {
            Some(p) => p.squared(),
            None => F::epsilon(),
        }
    }
}

/// Stiffness and dampening replacements for a single tick.
///
/// Values are used as given; zero or negative constants are allowed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickOverrides<F: Float> {
    pub stiffness: Option<F>,
    pub dampening: Option<F>,
}

impl<F: Float> TickOverrides<F> {
    /// No overrides: the spring's own tunables apply.
    pub fn none() -> Self {
        TickOverrides {
            stiffness: None,
            dampening: None,
        }
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = Some(stiffness);
        self
    }

    pub fn with_dampening(mut self, dampening: F) -> Self {
        self.dampening = Some(dampening);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_precision_is_squared() {
        let config = SpringConfig::new(0.2f64, 0.4).with_precision(0.1);
        assert!((config.squared_precision() - 0.01).abs() < 1e-15);
    }

    #[test]
    fn default_precision_is_raw_epsilon() {
        let config = SpringConfig::new(0.2f32, 0.4);
        assert_eq!(config.squared_precision(), f32::EPSILON);
    }

    #[test]
    fn overrides_builder() {
        let o = TickOverrides::none().with_dampening(0.9f32);
        assert_eq!(o.stiffness, None);
        assert_eq!(o.dampening, Some(0.9));
        assert_eq!(TickOverrides::<f32>::default(), TickOverrides::none());
    }
}
