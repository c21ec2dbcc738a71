//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasIterate`]: events that carry an iteration counter
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use descent_core::{Objective, Scalar};

use descent_solvers::optimization::bfgs;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event, in base units.
    ///
    /// Returns `f64::NAN` when the event carries no objective.
    fn objective(&self) -> f64;
}

/// An event that carries an iteration counter.
pub trait HasIterate {
    /// Returns the number of iterations completed when the event was emitted.
    fn iter(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bfgs::Event ---

impl<O: Objective> HasObjective for bfgs::Event<'_, O> {
    fn objective(&self) -> f64 {
        self.value().map_or(f64::NAN, Scalar::base)
    }
}

impl<O: Objective> HasIterate for bfgs::Event<'_, O> {
    fn iter(&self) -> usize {
        bfgs::Event::iter(self)
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for bfgs::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use descent_core::FnObjective;

    #[test]
    fn bfgs_events_expose_objective_and_iterate() {
        let objective = FnObjective::new(|x: &f64| (x - 1.0).powi(2), |x: &f64| 2.0 * (x - 1.0));
        let config = bfgs::Config::new(1e-6, 10.0).unwrap();

        let mut seen = Vec::new();
        let observer = |event: &bfgs::Event<'_, _>| {
            seen.push((event.iter(), event.objective()));
            None
        };

        let solution = bfgs::minimize(&objective, &0.0, &config, observer).unwrap();
        assert_eq!(solution.status, bfgs::Status::Converged);

        // Bootstrapped, then Iteration and Stepped per quasi-Newton step, then
        // the final Iteration that converges.
        assert_eq!(seen.len(), 2 * solution.iters + 2);
        assert_eq!(seen[0].0, 0);
        assert!(!seen[0].1.is_nan());
        assert!(seen[1].1.is_nan());
        assert_relative_eq!(seen[seen.len() - 2].1, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn bfgs_action_can_stop_early() {
        assert_eq!(bfgs::Action::stop_early(), bfgs::Action::StopEarly);
    }
}
