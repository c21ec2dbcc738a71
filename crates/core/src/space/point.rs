use super::Vector;

/// An element of an affine space.
///
/// Points can be subtracted, yielding a [`Difference`](Point::Difference)
/// vector, and translated by a difference, yielding another point. Unlike
/// vectors, points cannot be added together or scaled.
pub trait Point: Clone {
    /// The vector space of displacements between points.
    type Difference: Vector;

    /// Returns the displacement `self - origin`.
    fn difference(&self, origin: &Self) -> Self::Difference;

    /// Returns the point `self + displacement`.
    #[must_use]
    fn translate(&self, displacement: &Self::Difference) -> Self;
}

/// Every vector space is an affine space over itself.
impl<V: Vector> Point for V {
    type Difference = V;

    fn difference(&self, origin: &Self) -> V {
        self.minus(origin)
    }

    fn translate(&self, displacement: &V) -> Self {
        self.plus(displacement)
    }
}

/// A point located by its displacement from a fixed origin.
///
/// Wrapping a vector in `Position` forgets its vector structure: positions
/// can only be subtracted and translated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position<V>(V);

impl<V: Vector> Position<V> {
    /// Creates the point at `displacement` from the origin.
    pub fn new(displacement: V) -> Self {
        Self(displacement)
    }

    /// Returns the displacement of this point from the origin.
    pub fn from_origin(&self) -> &V {
        &self.0
    }

    /// Consumes the point and returns its displacement from the origin.
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<V: Vector> Point for Position<V> {
    type Difference = V;

    fn difference(&self, origin: &Self) -> V {
        self.0.minus(&origin.0)
    }

    fn translate(&self, displacement: &V) -> Self {
        Self(self.0.plus(displacement))
    }
}
