use thiserror::Error;

use descent_core::Scalar;

use crate::optimization::line_search;

/// Configuration for the BFGS solver.
///
/// Lengths are measured in the base units of the argument's difference
/// space, the same units as [`Vector::norm`](descent_core::Vector::norm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    radius: f64,
    max_iters: usize,
    line_search: line_search::Config,
}

/// Errors that can occur when validating a BFGS solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("radius must be finite and positive")]
    Radius,
}

impl Config {
    /// Creates a new config with a step tolerance and a trust radius.
    ///
    /// The `tolerance` sets both the length of the first steepest-descent
    /// step and the step length at which the solver reports convergence. The
    /// `radius` bounds how far any iterate may move from the starting point.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is non-positive or non-finite.
    pub fn new(tolerance: f64, radius: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::Radius);
        }

        Ok(Self {
            tolerance,
            radius,
            max_iters: 1000,
            line_search: line_search::Config::default(),
        })
    }

    /// Creates a new config from a tolerance and radius given as quantities.
    ///
    /// Both are converted to base units, so a problem over `[Length; N]`
    /// can state them as lengths in any unit `uom` supports.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is non-positive or non-finite.
    pub fn from_quantities<L: Scalar>(tolerance: L, radius: L) -> Result<Self, ConfigError> {
        Self::new(tolerance.base(), radius.base())
    }

    /// Sets the maximum number of quasi-Newton iterations.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the line search used for every step.
    #[must_use]
    pub fn with_line_search(mut self, line_search: line_search::Config) -> Self {
        self.line_search = line_search;
        self
    }

    /// Returns the step tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the trust radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the maximum number of quasi-Newton iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the line search config.
    #[must_use]
    pub fn line_search(&self) -> &line_search::Config {
        &self.line_search
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_lengths() {
        let config = Config::new(1e-6, 100.0).unwrap();

        assert_eq!(config.tolerance(), 1e-6);
        assert_eq!(config.radius(), 100.0);
        assert_eq!(config.max_iters(), 1000);
        assert_eq!(config.line_search(), &line_search::Config::default());
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tolerance in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(tolerance, 1.0), Err(ConfigError::Tolerance));
        }
    }

    #[test]
    fn rejects_bad_radius() {
        for radius in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert_eq!(Config::new(1e-6, radius), Err(ConfigError::Radius));
        }
    }

    #[test]
    fn quantities_become_base_lengths() {
        let config = Config::from_quantities(0.5, 20.0).unwrap();

        assert_eq!(config.tolerance(), 0.5);
        assert_eq!(config.radius(), 20.0);
        assert_eq!(Config::from_quantities(1.0, -1.0), Err(ConfigError::Radius));
    }

    #[test]
    fn builder_overrides_defaults() {
        let line_search = line_search::Config::new(1e-3, 0.5).unwrap();
        let config = Config::new(1e-3, 10.0)
            .unwrap()
            .with_max_iters(5)
            .with_line_search(line_search);

        assert_eq!(config.max_iters(), 5);
        assert_eq!(config.line_search().c2(), 0.5);
    }
}
