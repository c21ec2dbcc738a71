use ndarray::{Array1, Array2};

use descent_core::Vector;

/// A symmetric approximation of the inverse Hessian.
///
/// The operator acts on difference vectors through their base-unit
/// coordinates. It starts as a scaled identity, which needs no storage, and
/// becomes a dense matrix on its first rank-two update.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseHessian {
    repr: Repr,
}

#[derive(Debug, Clone, PartialEq)]
enum Repr {
    ScaledIdentity(f64),
    Dense(Array2<f64>),
}

impl InverseHessian {
    /// Creates the operator `scale · I`.
    #[must_use]
    pub fn scaled_identity(scale: f64) -> Self {
        Self {
            repr: Repr::ScaledIdentity(scale),
        }
    }

    /// Applies the operator to `v`.
    ///
    /// # Panics
    ///
    /// Panics if `v` does not match the dimension of a dense operator.
    #[must_use]
    pub fn apply<V: Vector>(&self, v: &V) -> V {
        V::from_coordinates(self.apply_coordinates(&v.coordinates()))
    }

    /// Evaluates the bilinear form `u · (H v)`.
    #[must_use]
    pub fn bilinear_form<V: Vector>(&self, u: &V, v: &V) -> f64 {
        u.coordinates().dot(&self.apply_coordinates(&v.coordinates()))
    }

    /// Returns the BFGS update of the operator for the secant pair `(s, y)`.
    ///
    /// With `ρ = 1 / (s · y)`, the update is
    /// `H + ρ (ρ H(y, y) + 1) s sᵀ − ρ (H y sᵀ + s (H y)ᵀ)`.
    /// Only the upper triangle is computed; the lower one mirrors it, so the
    /// result is exactly symmetric.
    ///
    /// # Panics
    ///
    /// Panics if `s · y` is zero.
    #[must_use]
    pub fn rank_two_update<V: Vector>(&self, s: &V, y: &V) -> Self {
        let s = s.coordinates();
        let y = y.coordinates();

        let sy = s.dot(&y);
        assert!(sy != 0.0, "rank-two update needs a secant pair with s · y ≠ 0");
        let rho = sy.recip();

        let hy = self.apply_coordinates(&y);
        let outer = rho * (rho * y.dot(&hy) + 1.0);

        let n = s.len();
        let mut matrix = self.to_dense(n);
        for i in 0..n {
            for j in i..n {
                let entry = matrix[[i, j]] + outer * s[i] * s[j]
                    - rho * (hy[i] * s[j] + s[i] * hy[j]);
                matrix[[i, j]] = entry;
                matrix[[j, i]] = entry;
            }
        }

        Self {
            repr: Repr::Dense(matrix),
        }
    }

    /// Returns the operator as an `n × n` matrix.
    ///
    /// # Panics
    ///
    /// Panics if the operator is dense with a dimension other than `n`.
    #[must_use]
    pub fn to_dense(&self, n: usize) -> Array2<f64> {
        match &self.repr {
            Repr::ScaledIdentity(scale) => Array2::eye(n) * *scale,
            Repr::Dense(matrix) => {
                assert_eq!(matrix.nrows(), n, "operator dimension mismatch");
                matrix.clone()
            }
        }
    }

    fn apply_coordinates(&self, v: &Array1<f64>) -> Array1<f64> {
        match &self.repr {
            Repr::ScaledIdentity(scale) => v * *scale,
            Repr::Dense(matrix) => matrix.dot(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn scaled_identity_scales() {
        let h = InverseHessian::scaled_identity(0.5);

        assert_eq!(h.apply(&[2.0, -4.0]), [1.0, -2.0]);
        assert_relative_eq!(h.bilinear_form(&[1.0, 2.0], &[3.0, 1.0]), 2.5);
        assert_eq!(h.to_dense(2), array![[0.5, 0.0], [0.0, 0.5]]);
    }

    #[test]
    fn update_satisfies_the_secant_equation() {
        let h = InverseHessian::scaled_identity(1.0);
        let s = [1.0, 0.5, -0.25];
        let y = [2.0, 1.5, 0.5];

        let updated = h.rank_two_update(&s, &y);
        let hy = updated.apply(&y);

        for (actual, expected) in hy.iter().zip(s) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn updates_stay_symmetric() {
        let pairs = [
            ([1.0, 0.0, 2.0], [3.0, 0.5, 1.0]),
            ([0.3, -1.2, 0.7], [0.1, -2.0, 0.4]),
            ([-0.5, 0.25, 1e-3], [-1.0, 0.9, 0.2]),
            ([2.0, 2.0, -1.0], [1.0, 4.0, -0.5]),
        ];

        let mut h = InverseHessian::scaled_identity(0.7);
        for (s, y) in pairs {
            h = h.rank_two_update(&s, &y);
        }

        let vectors = [[1.0, 2.0, 3.0], [-0.4, 0.0, 5.0], [1e-2, -7.0, 0.3]];
        for u in vectors {
            for v in vectors {
                assert_relative_eq!(
                    h.bilinear_form(&u, &v),
                    h.bilinear_form(&v, &u),
                    epsilon = 1e-10,
                    max_relative = 1e-12
                );
            }
        }

        let matrix = h.to_dense(3);
        assert_eq!(matrix, matrix.t());
    }

    #[test]
    fn update_recovers_a_quadratic_in_one_dimension() {
        // f(x) = 2x², so the true inverse Hessian is 1/4.
        let h = InverseHessian::scaled_identity(1.0);

        let updated = h.rank_two_update(&0.5, &2.0);

        assert_relative_eq!(updated.apply(&1.0), 0.25);
    }

    #[test]
    #[should_panic(expected = "s · y")]
    fn orthogonal_secant_pair_panics() {
        let h = InverseHessian::scaled_identity(1.0);
        let _ = h.rank_two_update(&[1.0, 0.0], &[0.0, 1.0]);
    }
}
