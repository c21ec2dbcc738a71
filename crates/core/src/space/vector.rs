use ndarray::Array1;

/// A real inner-product space.
///
/// Vectors are exposed through their Cartesian coordinates in base units,
/// which is all the optimizer needs to add, scale and pair them or to apply a
/// linear operator to them. Displacements between points and gradients of an
/// objective are both vectors; their coordinate representations coincide.
///
/// `from_coordinates` must accept any array produced by `coordinates` on a
/// vector of the same space. The provided operations assume both operands
/// belong to the same space and panic on a dimension mismatch.
pub trait Vector: Clone {
    /// Returns the Cartesian coordinates in base units.
    fn coordinates(&self) -> Array1<f64>;

    /// Builds a vector from Cartesian coordinates in base units.
    fn from_coordinates(coordinates: Array1<f64>) -> Self;

    /// Returns the number of coordinates.
    fn dimension(&self) -> usize {
        self.coordinates().len()
    }

    /// Returns `self + other`.
    #[must_use]
    fn plus(&self, other: &Self) -> Self {
        Self::from_coordinates(self.coordinates() + other.coordinates())
    }

    /// Returns `self - other`.
    #[must_use]
    fn minus(&self, other: &Self) -> Self {
        Self::from_coordinates(self.coordinates() - other.coordinates())
    }

    /// Returns `factor * self`.
    #[must_use]
    fn scaled(&self, factor: f64) -> Self {
        Self::from_coordinates(self.coordinates() * factor)
    }

    /// Returns `-self`.
    #[must_use]
    fn negated(&self) -> Self {
        Self::from_coordinates(-self.coordinates())
    }

    /// Returns the inner product with `other`, in base units.
    fn inner(&self, other: &Self) -> f64 {
        self.coordinates().dot(&other.coordinates())
    }

    /// Returns the squared Euclidean norm, in base units.
    fn norm_squared(&self) -> f64 {
        let coordinates = self.coordinates();
        coordinates.dot(&coordinates)
    }

    /// Returns the Euclidean norm, in base units.
    fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns true if every coordinate is exactly zero.
    fn is_zero(&self) -> bool {
        self.coordinates().iter().all(|&c| c == 0.0)
    }
}

impl Vector for f64 {
    fn coordinates(&self) -> Array1<f64> {
        Array1::from_elem(1, *self)
    }

    fn from_coordinates(coordinates: Array1<f64>) -> Self {
        coordinates[0]
    }
}

impl<const N: usize> Vector for [f64; N] {
    fn coordinates(&self) -> Array1<f64> {
        Array1::from_iter(self.iter().copied())
    }

    fn from_coordinates(coordinates: Array1<f64>) -> Self {
        std::array::from_fn(|i| coordinates[i])
    }

    fn dimension(&self) -> usize {
        N
    }
}

impl Vector for Vec<f64> {
    fn coordinates(&self) -> Array1<f64> {
        Array1::from_vec(self.clone())
    }

    fn from_coordinates(coordinates: Array1<f64>) -> Self {
        coordinates.to_vec()
    }

    fn dimension(&self) -> usize {
        self.len()
    }
}

impl Vector for Array1<f64> {
    fn coordinates(&self) -> Array1<f64> {
        self.clone()
    }

    fn from_coordinates(coordinates: Array1<f64>) -> Self {
        coordinates
    }

    fn dimension(&self) -> usize {
        self.len()
    }
}
