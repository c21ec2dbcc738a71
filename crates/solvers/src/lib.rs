//! Numerical solvers built on the `descent-core` abstractions.
//!
//! # Modules
//!
//! - [`optimization`]: local, derivative-based minimization: a strong Wolfe
//!   line search and the BFGS quasi-Newton method built on it

pub mod optimization;
