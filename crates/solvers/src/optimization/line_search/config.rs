use thiserror::Error;

/// Configuration for the strong Wolfe line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    c1: f64,
    c2: f64,
    max_doublings: usize,
    max_zoom_iters: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("c1 must lie in (0, 1)")]
    C1,

    #[error("c2 must lie in (c1, 1)")]
    C2,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-4, 0.9).unwrap()
    }
}

impl Config {
    /// Creates a new config with the given Wolfe coefficients.
    ///
    /// `c1` is the sufficient-decrease (Armijo) coefficient and `c2` the
    /// curvature coefficient. Iteration caps take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < c1 < c2 < 1`.
    pub fn new(c1: f64, c2: f64) -> Result<Self, ConfigError> {
        if !(c1 > 0.0 && c1 < 1.0) {
            return Err(ConfigError::C1);
        }
        if !(c2 > c1 && c2 < 1.0) {
            return Err(ConfigError::C2);
        }

        Ok(Self {
            c1,
            c2,
            max_doublings: 100,
            max_zoom_iters: 100,
        })
    }

    /// Sets how many times the trial step may double while bracketing.
    #[must_use]
    pub fn with_max_doublings(mut self, max_doublings: usize) -> Self {
        self.max_doublings = max_doublings;
        self
    }

    /// Sets how many trial steps the zoom phase may take.
    #[must_use]
    pub fn with_max_zoom_iters(mut self, max_zoom_iters: usize) -> Self {
        self.max_zoom_iters = max_zoom_iters;
        self
    }

    /// Returns the sufficient-decrease coefficient.
    #[must_use]
    pub fn c1(&self) -> f64 {
        self.c1
    }

    /// Returns the curvature coefficient.
    #[must_use]
    pub fn c2(&self) -> f64 {
        self.c2
    }

    /// Returns the maximum number of step doublings while bracketing.
    #[must_use]
    pub fn max_doublings(&self) -> usize {
        self.max_doublings
    }

    /// Returns the maximum number of zoom iterations.
    #[must_use]
    pub fn max_zoom_iters(&self) -> usize {
        self.max_zoom_iters
    }
}
