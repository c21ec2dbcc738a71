use std::{convert::Infallible, marker::PhantomData};

use crate::{Point, Scalar, Vector};

/// A differentiable scalar field to be optimized.
///
/// An objective maps an argument point to a scalar value and supplies the
/// gradient of that value at any point. The gradient must satisfy, for any
/// direction `d`, that its pairing with `d` is the directional derivative of
/// the value along `d` (see [`pair`](crate::pair)).
///
/// Solvers treat both methods as pure functions that are safe to call
/// repeatedly with arbitrary arguments; no caching is performed on the
/// objective's behalf.
pub trait Objective {
    type Argument: Point;
    type Value: Scalar;
    type Gradient: Vector;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the value cannot be computed.
    fn value(&self, x: &Self::Argument) -> Result<Self::Value, Self::Error>;

    /// Evaluates the gradient of the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the gradient cannot be computed.
    fn gradient(&self, x: &Self::Argument) -> Result<Self::Gradient, Self::Error>;
}

impl<O: Objective + ?Sized> Objective for &O {
    type Argument = O::Argument;
    type Value = O::Value;
    type Gradient = O::Gradient;
    type Error = O::Error;

    fn value(&self, x: &Self::Argument) -> Result<Self::Value, Self::Error> {
        (**self).value(x)
    }

    fn gradient(&self, x: &Self::Argument) -> Result<Self::Gradient, Self::Error> {
        (**self).gradient(x)
    }
}

/// Type alias for the displacement type of an objective's argument space.
///
/// This is a convenience for accessing [`Point::Difference`] without writing
/// out the fully qualified syntax.
pub type DifferenceOf<O> = <<O as Objective>::Argument as Point>::Difference;

/// An [`Objective`] built from a pair of infallible closures.
///
/// # Example
///
/// ```
/// use descent_core::{FnObjective, Objective};
///
/// let paraboloid = FnObjective::new(
///     |x: &[f64; 2]| x[0] * x[0] + 2.0 * x[1] * x[1],
///     |x: &[f64; 2]| [2.0 * x[0], 4.0 * x[1]],
/// );
///
/// assert_eq!(paraboloid.value(&[1.0, 1.0]), Ok(3.0));
/// assert_eq!(paraboloid.gradient(&[1.0, 1.0]), Ok([2.0, 4.0]));
/// ```
pub struct FnObjective<A, S, G, F, D> {
    value: F,
    gradient: D,
    signature: PhantomData<fn(&A) -> (S, G)>,
}

impl<A, S, G, F, D> FnObjective<A, S, G, F, D>
where
    F: Fn(&A) -> S,
    D: Fn(&A) -> G,
{
    /// Creates an objective from its value function and gradient function.
    pub fn new(value: F, gradient: D) -> Self {
        Self {
            value,
            gradient,
            signature: PhantomData,
        }
    }
}

impl<A, S, G, F, D> Objective for FnObjective<A, S, G, F, D>
where
    A: Point,
    S: Scalar,
    G: Vector,
    F: Fn(&A) -> S,
    D: Fn(&A) -> G,
{
    type Argument = A;
    type Value = S;
    type Gradient = G;
    type Error = Infallible;

    fn value(&self, x: &A) -> Result<S, Infallible> {
        Ok((self.value)(x))
    }

    fn gradient(&self, x: &A) -> Result<G, Infallible> {
        Ok((self.gradient)(x))
    }
}

/// Adapter that negates an objective and its gradient.
///
/// Used to implement maximization by minimizing the negated objective.
pub struct Negated<O>(pub O);

impl<O: Objective> Objective for Negated<O> {
    type Argument = O::Argument;
    type Value = O::Value;
    type Gradient = O::Gradient;
    type Error = O::Error;

    fn value(&self, x: &Self::Argument) -> Result<Self::Value, Self::Error> {
        self.0.value(x).map(|v| -v)
    }

    fn gradient(&self, x: &Self::Argument) -> Result<Self::Gradient, Self::Error> {
        self.0.gradient(x).map(|g| g.negated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    #[test]
    fn closures_make_an_objective() {
        let objective = FnObjective::new(|x: &f64| (x - 2.0).powi(2), |x: &f64| 2.0 * (x - 2.0));

        assert_relative_eq!(objective.value(&5.0).unwrap(), 9.0);
        assert_relative_eq!(objective.gradient(&5.0).unwrap(), 6.0);
    }

    #[test]
    fn negate_objective_flips_value_and_gradient() {
        let objective = FnObjective::new(
            |x: &[f64; 2]| x[0] - 3.0 * x[1],
            |_: &[f64; 2]| [1.0, -3.0],
        );

        let negated = Negated(objective);

        assert_relative_eq!(negated.value(&[1.0, 1.0]).unwrap(), 2.0);
        assert_eq!(negated.gradient(&[1.0, 1.0]).unwrap(), [-1.0, 3.0]);
    }

    #[derive(Debug, Error)]
    #[error("outside the domain: {0}")]
    struct DomainError(f64);

    struct Log;

    impl Objective for Log {
        type Argument = f64;
        type Value = f64;
        type Gradient = f64;
        type Error = DomainError;

        fn value(&self, x: &f64) -> Result<f64, DomainError> {
            if *x > 0.0 {
                Ok(x.ln())
            } else {
                Err(DomainError(*x))
            }
        }

        fn gradient(&self, x: &f64) -> Result<f64, DomainError> {
            if *x > 0.0 {
                Ok(x.recip())
            } else {
                Err(DomainError(*x))
            }
        }
    }

    #[test]
    fn negation_propagates_errors() {
        let negated = Negated(Log);

        assert_relative_eq!(negated.value(&1.0).unwrap(), 0.0);
        assert_relative_eq!(negated.gradient(&2.0).unwrap(), -0.5);
        assert!(negated.value(&-1.0).is_err());
    }

    #[test]
    fn borrowed_objectives_can_be_negated() {
        let negated = Negated(&Log);

        assert_relative_eq!(negated.value(&1.0).unwrap(), 0.0);
        assert_relative_eq!(negated.gradient(&4.0).unwrap(), -0.25);
    }
}
