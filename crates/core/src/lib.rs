//! Core traits and types for derivative-based optimization.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Scalar`]: an ordered one-dimensional quantity, such as an objective
//!   value, that may carry physical units
//! - [`Vector`]: a real inner-product space (displacements and gradients)
//! - [`Point`]: an element of an affine space over a [`Vector`]
//! - [`Objective`]: a scalar field and its gradient, supplied by the caller
//! - [`Observer`]: receives solver events and optionally returns control actions
//!
//! Dimensioned quantities from [`uom`] implement [`Scalar`], and fixed-size
//! arrays of them implement [`Vector`], so a problem can be posed in physical
//! units end to end.

mod objective;
mod observer;
mod space;
mod units;

pub use objective::{DifferenceOf, FnObjective, Negated, Objective};
pub use observer::Observer;
pub use space::{Point, Position, Scalar, Vector, pair};
