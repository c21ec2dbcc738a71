use descent_core::Scalar;

/// The quadratic through two values and one derivative.
///
/// Given `ϕ(a)`, `ϕ(b)` and `ϕ'(a)`, this is the unique polynomial of minimal
/// degree matching all three. Line searches use its stationary point as a
/// candidate step, which callers must validate before use: the extremum may
/// fall outside `[a, b]`, or not exist at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hermite2<S> {
    arguments: [f64; 2],
    values: [S; 2],
    derivative: S,
}

impl<S: Scalar> Hermite2<S> {
    /// Creates the model from values at both arguments and the derivative at
    /// the first one.
    pub fn new(arguments: [f64; 2], values: [S; 2], derivative: S) -> Self {
        Self {
            arguments,
            values,
            derivative,
        }
    }

    /// Returns the model value at `argument`.
    #[must_use]
    pub fn evaluate(&self, argument: f64) -> S {
        let [a, b] = self.arguments;
        let t = (argument - a) / (b - a);
        self.values[0] + self.derivative * (argument - a) + self.excess() * (t * t)
    }

    /// Returns the argument of the model's stationary point.
    ///
    /// Returns `None` if the model is linear (no stationary point) or the
    /// stationary point is not finite.
    #[must_use]
    pub fn find_extremum(&self) -> Option<f64> {
        let [a, b] = self.arguments;
        let width = b - a;
        let excess = self.excess();
        if excess == S::zero() {
            return None;
        }
        let extremum = a - 0.5 * self.derivative.ratio(excess) * width * width;
        extremum.is_finite().then_some(extremum)
    }

    /// Returns `ϕ(b) - ϕ(a) - ϕ'(a)(b - a)`, the departure from linearity.
    fn excess(&self) -> S {
        let [a, b] = self.arguments;
        self.values[1] - self.values[0] - self.derivative * (b - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn recovers_an_exact_quadratic() {
        // ϕ(α) = (α - 3)² + 1
        let phi = |alpha: f64| (alpha - 3.0).powi(2) + 1.0;
        let model = Hermite2::new([0.0, 5.0], [phi(0.0), phi(5.0)], -6.0);

        assert_relative_eq!(model.find_extremum().unwrap(), 3.0);
        for alpha in [-1.0, 0.0, 1.5, 3.0, 5.0, 8.0] {
            assert_relative_eq!(model.evaluate(alpha), phi(alpha), epsilon = 1e-12);
        }
    }

    #[test]
    fn works_with_reversed_arguments() {
        // ϕ(α) = 2(α - 1)², derivative known at the right end.
        let phi = |alpha: f64| 2.0 * (alpha - 1.0).powi(2);
        let model = Hermite2::new([4.0, -2.0], [phi(4.0), phi(-2.0)], 12.0);

        assert_relative_eq!(model.find_extremum().unwrap(), 1.0);
    }

    #[test]
    fn extremum_may_lie_outside_the_interval() {
        // ϕ(α) = (α - 10)², sampled on [0, 1].
        let phi = |alpha: f64| (alpha - 10.0).powi(2);
        let model = Hermite2::new([0.0, 1.0], [phi(0.0), phi(1.0)], -20.0);

        assert_relative_eq!(model.find_extremum().unwrap(), 10.0);
    }

    #[test]
    fn linear_data_has_no_extremum() {
        let model = Hermite2::new([0.0, 2.0], [1.0, 5.0], 2.0);

        assert_eq!(model.find_extremum(), None);
    }

    #[test]
    fn interpolates_the_data() {
        let model = Hermite2::new([1.0, 3.0], [2.0, -1.0], 0.5);

        assert_relative_eq!(model.evaluate(1.0), 2.0);
        assert_relative_eq!(model.evaluate(3.0), -1.0);
        // Derivative at a, by central difference.
        let h = 1e-6;
        let slope = (model.evaluate(1.0 + h) - model.evaluate(1.0 - h)) / (2.0 * h);
        assert_relative_eq!(slope, 0.5, epsilon = 1e-6);
    }
}
