//! The BFGS quasi-Newton method with a trust radius.
//!
//! # Algorithm
//!
//! The solver keeps an approximation `H` of the inverse Hessian and steps
//! along `p = -H g`, choosing the step length with a strong Wolfe
//! [line search](super::line_search). After each step it updates `H` from the
//! secant pair `s = x' - x`, `y = g' - g`.
//!
//! The first step is steepest descent with length equal to the tolerance.
//! Its secant pair seeds `H` as the scaled identity `(s · y) / ‖y‖² · I`,
//! which puts the first quasi-Newton step on the scale of the objective's
//! curvature.
//!
//! # Termination
//!
//! - [`Status::Converged`]: the quasi-Newton step `‖H g‖` is within the
//!   tolerance.
//! - [`Status::Stationary`]: the gradient at the start is exactly zero.
//! - [`Status::Aborted`]: a line search could not certify its step, or a
//!   secant pair had `s · y = 0`. The last accepted iterate is returned as a
//!   best effort.
//! - [`Error::OutOfTrustRegion`]: an iterate moved farther than the trust
//!   radius from the start. No point is returned, since this indicates
//!   divergence.
//!
//! # Observer Events
//!
//! The solver emits [`Event::Bootstrapped`] once after the steepest-descent
//! step, then per quasi-Newton iteration an [`Event::Iteration`] before the
//! convergence test and an [`Event::Stepped`] after each accepted step.
//! Observers can return [`Action::StopEarly`] to halt with the latest
//! accepted iterate.

mod action;
mod config;
mod error;
mod event;
mod inverse_hessian;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use inverse_hessian::InverseHessian;
pub use solution::{AbortReason, Solution, Status};

use descent_core::{Negated, Objective, Observer};

use search::search;
use state::Sense;

/// Finds a local minimum of the objective using BFGS.
///
/// The observer receives an [`Event`] at each stage of the run.
/// See the [module docs](self) for details on event timing.
///
/// # Errors
///
/// Returns [`Error::OutOfTrustRegion`] if an iterate leaves the trust region,
/// or an evaluation error if the objective fails.
pub fn minimize<O, Obs>(
    objective: &O,
    x_start: &O::Argument,
    config: &Config,
    observer: Obs,
) -> Result<Solution<O::Argument>, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O>, Action>,
{
    search::<O, _, _>(objective, x_start, config, observer, Sense::Minimize)
}

/// Finds a local minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::OutOfTrustRegion`] if an iterate leaves the trust region,
/// or an evaluation error if the objective fails.
pub fn minimize_unobserved<O: Objective>(
    objective: &O,
    x_start: &O::Argument,
    config: &Config,
) -> Result<Solution<O::Argument>, Error> {
    minimize(objective, x_start, config, ())
}

/// Finds a local maximum of the objective using BFGS.
///
/// Runs [`minimize`] on the negated objective. Events report values and
/// gradients of the original objective.
///
/// # Errors
///
/// Returns [`Error::OutOfTrustRegion`] if an iterate leaves the trust region,
/// or an evaluation error if the objective fails.
pub fn maximize<O, Obs>(
    objective: &O,
    x_start: &O::Argument,
    config: &Config,
    observer: Obs,
) -> Result<Solution<O::Argument>, Error>
where
    O: Objective,
    Obs: for<'a> Observer<Event<'a, O>, Action>,
{
    search::<O, _, _>(
        &Negated(objective),
        x_start,
        config,
        observer,
        Sense::Maximize,
    )
}

/// Finds a local maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::OutOfTrustRegion`] if an iterate leaves the trust region,
/// or an evaluation error if the objective fails.
pub fn maximize_unobserved<O: Objective>(
    objective: &O,
    x_start: &O::Argument,
    config: &Config,
) -> Result<Solution<O::Argument>, Error> {
    maximize(objective, x_start, config, ())
}

/// Minimizes the objective, returning `None` if the trust region is left.
///
/// Returns `Some(x)` for both converged and best-effort points; use
/// [`minimize`] to tell them apart.
///
/// The `tolerance` and `radius` are lengths in the base units of the
/// argument's difference space. For dimensioned arguments, build a
/// [`Config`] with [`Config::from_quantities`] and call [`minimize`].
///
/// # Errors
///
/// Returns an error if `tolerance` or `radius` is invalid, or if the
/// objective fails.
pub fn optimize<O: Objective>(
    objective: &O,
    x_start: &O::Argument,
    tolerance: f64,
    radius: f64,
) -> Result<Option<O::Argument>, Error> {
    let config = Config::new(tolerance, radius)?;

    match minimize_unobserved(objective, x_start, &config) {
        Ok(solution) => Ok(Some(solution.x)),
        Err(Error::OutOfTrustRegion { .. }) => Ok(None),
        Err(error) => Err(error),
    }
}
