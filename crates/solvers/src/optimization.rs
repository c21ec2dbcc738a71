//! Solvers for optimization problems: finding a local extremum of an objective.
//!
//! An [`Objective`] supplies a scalar value and its gradient over an affine
//! argument space. Solvers in this module use both to descend toward a local
//! minimum; maximization minimizes the [`Negated`] objective.
//!
//! # Solvers
//!
//! - [`line_search`]: one-dimensional search along a descent direction for a
//!   step satisfying the strong Wolfe conditions
//! - [`bfgs`]: the Broyden–Fletcher–Goldfarb–Shanno quasi-Newton method,
//!   bounded by a trust radius around the starting point
//!
//! [`Objective`]: descent_core::Objective
//! [`Negated`]: descent_core::Negated

mod evaluate;

pub use evaluate::EvalError;

pub mod bfgs;
pub mod line_search;
