use thiserror::Error;

use descent_core::{DifferenceOf, Objective, Point, Vector, pair};

/// Errors that can occur when evaluating an objective.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The objective value could not be computed.
    #[error("failed to evaluate objective value")]
    Value(#[source] E),

    /// The gradient could not be computed.
    #[error("failed to evaluate gradient")]
    Gradient(#[source] E),
}

/// Evaluates the objective value at `x`.
pub(crate) fn value<O: Objective>(
    objective: &O,
    x: &O::Argument,
) -> Result<O::Value, EvalError<O::Error>> {
    objective.value(x).map_err(EvalError::Value)
}

/// Evaluates the objective gradient at `x`.
pub(crate) fn gradient<O: Objective>(
    objective: &O,
    x: &O::Argument,
) -> Result<O::Gradient, EvalError<O::Error>> {
    objective.gradient(x).map_err(EvalError::Gradient)
}

/// The objective restricted to the ray `x + α p`.
///
/// Line searches work with `ϕ(α) = f(x + α p)` and its derivative
/// `ϕ'(α) = ⟨∇f(x + α p), p⟩`.
pub(crate) struct Ray<'a, O: Objective> {
    objective: &'a O,
    origin: &'a O::Argument,
    direction: &'a DifferenceOf<O>,
}

impl<'a, O: Objective> Ray<'a, O> {
    pub(crate) fn new(
        objective: &'a O,
        origin: &'a O::Argument,
        direction: &'a DifferenceOf<O>,
    ) -> Self {
        Self {
            objective,
            origin,
            direction,
        }
    }

    /// Returns the point `x + α p`.
    pub(crate) fn point(&self, alpha: f64) -> O::Argument {
        self.origin.translate(&self.direction.scaled(alpha))
    }

    /// Returns `ϕ(0) = f(x)`, evaluated at the origin itself.
    pub(crate) fn value_at_origin(&self) -> Result<O::Value, EvalError<O::Error>> {
        value(self.objective, self.origin)
    }

    /// Returns `ϕ'(0)` from a gradient already known at the origin.
    pub(crate) fn slope_from(&self, gradient: &O::Gradient) -> O::Value {
        pair(gradient, self.direction)
    }

    /// Returns `ϕ(α)`.
    pub(crate) fn value(&self, alpha: f64) -> Result<O::Value, EvalError<O::Error>> {
        value(self.objective, &self.point(alpha))
    }

    /// Returns `ϕ'(α)`.
    pub(crate) fn slope(&self, alpha: f64) -> Result<O::Value, EvalError<O::Error>> {
        let gradient = gradient(self.objective, &self.point(alpha))?;
        Ok(self.slope_from(&gradient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use descent_core::FnObjective;

    #[test]
    fn ray_restricts_objective_to_a_line() {
        let objective = FnObjective::new(
            |x: &[f64; 2]| x[0] * x[0] + x[1] * x[1],
            |x: &[f64; 2]| [2.0 * x[0], 2.0 * x[1]],
        );
        let origin = [1.0, 0.0];
        let direction = [-1.0, 1.0];
        let ray = Ray::new(&objective, &origin, &direction);

        // ϕ(α) = (1 - α)² + α², ϕ'(α) = 4α - 2
        assert_eq!(ray.point(0.5), [0.5, 0.5]);
        assert_relative_eq!(ray.value_at_origin().unwrap(), 1.0);
        assert_relative_eq!(ray.value(0.5).unwrap(), 0.5);
        assert_relative_eq!(ray.slope(0.0).unwrap(), -2.0);
        assert_relative_eq!(ray.slope(2.0).unwrap(), 6.0);
        assert_relative_eq!(ray.slope_from(&[2.0, 0.0]), -2.0);
    }
}
