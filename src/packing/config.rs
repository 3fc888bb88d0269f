//! Packing parameters.

use crate::error::PackError;
use crate::primitives::Point2;
use num_traits::Float;

/// Failed attempts tolerated at one radius before the outer circle grows.
pub const DEFAULT_FAILURES_BEFORE_GROWTH: usize = 3;

/// Parameters for one packing run.
///
/// # Example
///
/// ```
/// use circlepack::packing::PackConfig;
/// use circlepack::primitives::Point2;
///
/// let config = PackConfig::new(Point2::new(0.0_f64, 0.0), 1.0, 100)
///     .with_growth_step(2.0)
///     .with_max_attempts(500);
///
/// assert_eq!(config.initial_radius, 10.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackConfig<F> {
    /// Center of the outer circle.
    pub center: Point2<F>,
    /// Starting radius of the outer circle.
    pub initial_radius: F,
    /// Radius of every inner circle.
    pub inner_radius: F,
    /// Number of randomly placed inner circles to fit.
    pub target_count: usize,
    /// Failed attempts at one radius before growing.
    pub failures_before_growth: usize,
    /// Amount added to the outer radius on each growth.
    pub growth_step: F,
    /// Give up after this many attempts. `None` retries forever.
    pub max_attempts: Option<usize>,
    /// Place the plus/L/T pattern before random filling.
    pub decorations: bool,
}

impl<F: Float> PackConfig<F> {
    /// Creates a configuration whose starting radius is derived from the
    /// target count.
    pub fn new(center: Point2<F>, inner_radius: F, target_count: usize) -> Self {
        Self {
            center,
            initial_radius: suggested_radius(inner_radius, target_count),
            inner_radius,
            target_count,
            failures_before_growth: DEFAULT_FAILURES_BEFORE_GROWTH,
            growth_step: F::one(),
            max_attempts: None,
            decorations: false,
        }
    }

    /// Sets the starting radius of the outer circle.
    pub fn with_initial_radius(mut self, radius: F) -> Self {
        self.initial_radius = radius;
        self
    }

    /// Sets how many failed attempts trigger a growth.
    pub fn with_failures_before_growth(mut self, failures: usize) -> Self {
        self.failures_before_growth = failures;
        self
    }

    /// Sets the radius increment applied on growth.
    pub fn with_growth_step(mut self, step: F) -> Self {
        self.growth_step = step;
        self
    }

    /// Caps the total number of attempts.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Enables or disables the decoration pattern.
    pub fn with_decorations(mut self, enabled: bool) -> Self {
        self.decorations = enabled;
        self
    }

    /// Checks the parameters before any placement happens.
    pub fn validate(&self) -> Result<(), PackError> {
        if self.target_count == 0 {
            return Err(PackError::invalid("target count must be at least 1"));
        }
        if !self.center.is_finite() {
            return Err(PackError::invalid("outer center must be finite"));
        }
        if !self.initial_radius.is_finite() || self.initial_radius <= F::zero() {
            return Err(PackError::invalid(
                "initial radius must be finite and positive",
            ));
        }
        if !self.inner_radius.is_finite() || self.inner_radius <= F::zero() {
            return Err(PackError::invalid(
                "inner radius must be finite and positive",
            ));
        }
        if self.inner_radius > self.initial_radius {
            return Err(PackError::invalid(
                "inner radius must not exceed the initial radius",
            ));
        }
        if !self.growth_step.is_finite() || self.growth_step <= F::zero() {
            return Err(PackError::invalid("growth step must be finite and positive"));
        }
        if self.failures_before_growth == 0 {
            return Err(PackError::invalid(
                "failures before growth must be at least 1",
            ));
        }
        if self.max_attempts == Some(0) {
            return Err(PackError::invalid("attempt limit must be at least 1"));
        }
        Ok(())
    }
}

/// Starting radius for `count` circles: `round(inner_radius * sqrt(count))`,
/// never smaller than `inner_radius`.
///
/// ```
/// use circlepack::packing::suggested_radius;
///
/// assert_eq!(suggested_radius(1.0_f64, 1500), 39.0);
/// assert_eq!(suggested_radius(3.0_f64, 0), 3.0);
/// ```
pub fn suggested_radius<F: Float>(inner_radius: F, count: usize) -> F {
    let count = F::from(count).unwrap_or_else(F::zero);
    (inner_radius * count.sqrt()).round().max(inner_radius)
}
