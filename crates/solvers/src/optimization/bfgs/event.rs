use descent_core::Objective;

use crate::optimization::line_search::Step;

/// Events emitted by the BFGS solver.
///
/// Objective values, slopes and gradients are reported for the objective the
/// caller passed in, including when maximizing.
pub enum Event<'a, O: Objective> {
    /// The first steepest-descent step was taken.
    ///
    /// Emitted once the step is known to stay within the trust region,
    /// whether or not its line search was certified.
    Bootstrapped {
        /// The point reached.
        x: &'a O::Argument,

        /// The line search result for the step.
        step: &'a Step<O::Value>,
    },

    /// A quasi-Newton iteration is about to test for convergence.
    Iteration {
        /// Quasi-Newton steps completed so far.
        iter: usize,

        /// The current iterate.
        x: &'a O::Argument,

        /// The gradient at the current iterate.
        gradient: &'a O::Gradient,

        /// Length of the quasi-Newton direction from the current iterate.
        direction_norm: f64,

        /// Distance from the starting point to the current iterate.
        distance: f64,
    },

    /// A quasi-Newton step was accepted.
    Stepped {
        /// Quasi-Newton steps completed, including this one.
        iter: usize,

        /// The new iterate.
        x: &'a O::Argument,

        /// The line search result for the step.
        step: &'a Step<O::Value>,
    },
}

impl<O: Objective> Event<'_, O> {
    /// Returns the iterate the event refers to.
    #[must_use]
    pub fn x(&self) -> &O::Argument {
        match self {
            Self::Bootstrapped { x, .. } | Self::Iteration { x, .. } | Self::Stepped { x, .. } => x,
        }
    }

    /// Returns the number of quasi-Newton steps completed.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Bootstrapped { .. } => 0,
            Self::Iteration { iter, .. } | Self::Stepped { iter, .. } => *iter,
        }
    }

    /// Returns the objective at the iterate, if the event carries it.
    #[must_use]
    pub fn value(&self) -> Option<O::Value> {
        match self {
            Self::Bootstrapped { step, .. } | Self::Stepped { step, .. } => Some(step.value),
            Self::Iteration { .. } => None,
        }
    }
}
