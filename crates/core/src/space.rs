//! Algebraic seams between the optimizer and the caller's argument space.
//!
//! The optimizer never looks inside the caller's types. It needs points it can
//! subtract and translate ([`Point`]), displacements and gradients it can add,
//! scale and pair ([`Vector`]), and objective values it can compare and scale
//! ([`Scalar`]).

mod point;
mod scalar;
mod vector;

pub use point::{Point, Position};
pub use scalar::Scalar;
pub use vector::Vector;

/// Pairs a gradient with a direction, yielding the directional derivative.
///
/// Gradients and displacements share a coordinate representation, so the
/// pairing is the inner product of their base-unit coordinates, expressed in
/// the objective's units.
pub fn pair<G, D, S>(gradient: &G, direction: &D) -> S
where
    G: Vector,
    D: Vector,
    S: Scalar,
{
    S::from_base(gradient.coordinates().dot(&direction.coordinates()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn pair_is_the_directional_derivative() {
        let gradient = [2.0, -1.0, 0.5];
        let direction = [1.0, 4.0, -2.0];

        let slope: f64 = pair(&gradient, &direction);

        assert_relative_eq!(slope, 2.0 - 4.0 - 1.0);
    }

    #[test]
    fn pair_across_representations() {
        let gradient = vec![3.0, 4.0];
        let direction = ndarray::array![0.5, 0.25];

        let slope: f64 = pair(&gradient, &direction);

        assert_relative_eq!(slope, 2.5);
    }
}
