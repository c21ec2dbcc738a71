//! Strong Wolfe line search along a descent direction.
//!
//! # Algorithm
//!
//! Given a point `x` and a descent direction `p`, the search looks for a step
//! length `α` such that `ϕ(α) = f(x + α p)` satisfies the strong Wolfe
//! conditions:
//!
//! - sufficient decrease: `ϕ(α) ≤ ϕ(0) + c₁ α ϕ'(0)`
//! - curvature: `|ϕ'(α)| ≤ -c₂ ϕ'(0)`
//!
//! The bracketing phase tries `α = 1, 2, 4, …` until a trial either satisfies
//! both conditions or brackets an acceptable step. The zoom phase then narrows
//! the bracket, proposing the extremum of a [`Hermite2`] model when it lies
//! safely inside the bracket and bisecting otherwise.
//!
//! # Outcomes
//!
//! Every search returns a [`Step`]. Its [`Certificate`] says whether the
//! strong Wolfe conditions are known to hold; uncertified steps are still the
//! best step length the search found and callers decide whether to use them.
//! Only failures of the objective itself are returned as errors.

mod config;
mod hermite;
mod step;
mod zoom;


pub use config::{Config, ConfigError};
pub use hermite::Hermite2;
pub use step::{Certificate, Step};

use descent_core::{DifferenceOf, Objective, Scalar};

use crate::optimization::evaluate::{EvalError, Ray};

use step::Conditions;
use zoom::{Bracket, Sample, zoom};

/// Factor by which the trial step grows during bracketing.
const GROWTH: f64 = 2.0;

/// Fraction of the bracket width, at each end, in which a model extremum is
/// rejected in favor of bisection.
const HERMITE_MARGIN: f64 = 0.01;

/// Searches `x + α p` for a step length satisfying the strong Wolfe conditions.
///
/// The `gradient` must be the objective's gradient at `x`, and `direction`
/// should be a descent direction (negative directional derivative).
///
/// # Errors
///
/// Returns an error if the objective fails to evaluate a value or gradient.
///
/// # Panics
///
/// Panics if the zoom bracket collapses to a single step length, which
/// indicates a logic error rather than a numerical difficulty.
pub fn search<O: Objective>(
    objective: &O,
    x: &O::Argument,
    direction: &DifferenceOf<O>,
    gradient: &O::Gradient,
    config: &Config,
) -> Result<Step<O::Value>, EvalError<O::Error>> {
    let ray = Ray::new(objective, x, direction);

    let initial_value = ray.value_at_origin()?;
    let initial_slope = ray.slope_from(gradient);
    let conditions = Conditions::new(initial_value, initial_slope, config.c1(), config.c2());

    let mut previous = Sample {
        alpha: 0.0,
        value: initial_value,
    };
    let mut previous_slope = initial_slope;
    let mut alpha = 1.0;
    let mut doublings = 0;

    loop {
        let value = ray.value(alpha)?;
        let current = Sample { alpha, value };

        if conditions.exceeds_armijo(alpha, value) || (doublings > 0 && value >= previous.value) {
            let bracket = Bracket::new(previous, previous_slope, current);
            return zoom(&ray, &conditions, bracket, config);
        }

        let slope = ray.slope(alpha)?;
        if conditions.meets_curvature(slope) {
            return Ok(conditions.step(alpha, value, Certificate::StrongWolfe));
        }

        if slope >= O::Value::zero() {
            let bracket = Bracket::new(current, slope, previous);
            return zoom(&ray, &conditions, bracket, config);
        }

        let next = alpha * GROWTH;
        if doublings >= config.max_doublings() || !next.is_finite() {
            log::debug!(
                "line search stopped growing after {doublings} doublings at alpha = {alpha}"
            );
            return Ok(conditions.step(alpha, value, Certificate::GrowthLimit));
        }

        previous = current;
        previous_slope = slope;
        alpha = next;
        doublings += 1;
    }
}
