use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

use super::ConfigError;

/// Errors that can occur during a BFGS run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// An iterate moved farther from the start than the trust radius allows.
    ///
    /// This signals divergence rather than slow progress, so no point is
    /// returned.
    #[error("left the trust region: distance {distance} exceeds radius {radius}")]
    OutOfTrustRegion {
        /// Distance from the starting point to the offending iterate.
        distance: f64,

        /// The configured trust radius.
        radius: f64,

        /// Quasi-Newton iterations completed before the breach.
        iters: usize,
    },

    #[error("objective value failed")]
    Value(#[source] Box<dyn StdError + Send + Sync>),

    #[error("gradient failed")]
    Gradient(#[source] Box<dyn StdError + Send + Sync>),
}

impl<E> From<EvalError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        match err {
            EvalError::Value(e) => Self::Value(Box::new(e)),
            EvalError::Gradient(e) => Self::Gradient(Box::new(e)),
        }
    }
}
