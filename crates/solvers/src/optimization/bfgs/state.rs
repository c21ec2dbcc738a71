use descent_core::{DifferenceOf, Objective, Point, Scalar, Vector};

use crate::optimization::line_search::Step;

use super::{InverseHessian, Solution, Status};

/// Whether the caller asked for a minimum or a maximum.
///
/// Maximization runs on the negated objective; the sense maps what the
/// solver sees back to the caller's objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    pub(super) fn value<S: Scalar>(self, value: S) -> S {
        match self {
            Self::Minimize => value,
            Self::Maximize => -value,
        }
    }

    pub(super) fn gradient<G: Vector>(self, gradient: &G) -> G {
        match self {
            Self::Minimize => gradient.clone(),
            Self::Maximize => gradient.negated(),
        }
    }

    pub(super) fn step<S: Scalar>(self, step: &Step<S>) -> Step<S> {
        Step {
            value: self.value(step.value),
            initial_value: self.value(step.initial_value),
            initial_slope: self.value(step.initial_slope),
            ..*step
        }
    }
}

/// Returns the difference vector sharing the gradient's coordinates.
pub(super) fn dual<O: Objective>(gradient: &O::Gradient) -> DifferenceOf<O> {
    DifferenceOf::<O>::from_coordinates(gradient.coordinates())
}

/// The secant pair `(s, y)` between two iterates.
pub(super) struct Secant<D> {
    pub(super) s: D,
    pub(super) y: D,
}

impl<D: Vector> Secant<D> {
    /// Returns `s · y` in base units.
    pub(super) fn curvature(&self) -> f64 {
        self.s.inner(&self.y)
    }
}

/// Returns the secant pair from `(x, g)` to `(x_next, g_next)`.
pub(super) fn secant<O: Objective>(
    x: &O::Argument,
    gradient: &O::Gradient,
    x_next: &O::Argument,
    gradient_next: &O::Gradient,
) -> Secant<DifferenceOf<O>> {
    Secant {
        s: x_next.difference(x),
        y: dual::<O>(gradient_next).minus(&dual::<O>(gradient)),
    }
}

/// The running state of a quasi-Newton iteration.
pub(super) struct State<O: Objective> {
    x: O::Argument,
    gradient: O::Gradient,
    inverse_hessian: InverseHessian,
}

impl<O: Objective> State<O> {
    pub(super) fn new(
        x: O::Argument,
        gradient: O::Gradient,
        inverse_hessian: InverseHessian,
    ) -> Self {
        Self {
            x,
            gradient,
            inverse_hessian,
        }
    }

    pub(super) fn x(&self) -> &O::Argument {
        &self.x
    }

    pub(super) fn gradient(&self) -> &O::Gradient {
        &self.gradient
    }

    /// Returns the quasi-Newton direction `-H g`.
    pub(super) fn direction(&self) -> DifferenceOf<O> {
        self.inverse_hessian.apply(&dual::<O>(&self.gradient)).negated()
    }

    /// Moves to the next iterate and folds its secant pair into `H`.
    pub(super) fn advance(
        &mut self,
        x: O::Argument,
        gradient: O::Gradient,
        secant: &Secant<DifferenceOf<O>>,
    ) {
        self.inverse_hessian = self.inverse_hessian.rank_two_update(&secant.s, &secant.y);
        self.x = x;
        self.gradient = gradient;
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<O::Argument> {
        Solution {
            status,
            x: self.x,
            iters,
        }
    }
}
