//! Dimensioned quantities as scalars and vectors.
//!
//! Each supported [`uom`] quantity implements [`Scalar`], and fixed-size arrays
//! of it implement [`Vector`]. Values cross into the optimizer in SI base
//! units, which is how `uom` stores them.
//!
//! A typical mechanical problem minimizes an [`Energy`] over positions given
//! as `[Length; N]`, with gradients given as `[Force; N]`: force times length
//! is energy, so the pairing of a gradient with a displacement lands back in
//! the objective's units.

use std::marker::PhantomData;

use ndarray::Array1;
use uom::si::f64::{Area, Energy, Force, Length, Mass, Power, Ratio, Time, Velocity, Volume};

use crate::{Scalar, Vector};

macro_rules! impl_quantity {
    ($($quantity:ident),* $(,)?) => {$(
        impl Scalar for $quantity {
            #[inline]
            fn from_base(value: f64) -> Self {
                $quantity {
                    dimension: PhantomData,
                    units: PhantomData,
                    value,
                }
            }

            #[inline]
            fn base(self) -> f64 {
                self.value
            }
        }

        impl<const N: usize> Vector for [$quantity; N] {
            fn coordinates(&self) -> Array1<f64> {
                Array1::from_iter(self.iter().map(|q| q.value))
            }

            fn from_coordinates(coordinates: Array1<f64>) -> Self {
                std::array::from_fn(|i| <$quantity as Scalar>::from_base(coordinates[i]))
            }

            fn dimension(&self) -> usize {
                N
            }
        }
    )*};
}

impl_quantity!(
    Area, Energy, Force, Length, Mass, Power, Ratio, Time, Velocity, Volume,
);

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        energy::{joule, kilojoule},
        force::newton,
        length::{kilometer, meter},
    };

    use crate::{Point, pair};

    #[test]
    fn quantities_are_scalars_in_base_units() {
        let e = Energy::new::<kilojoule>(1.5);

        assert_relative_eq!(e.base(), 1500.0);
        assert_eq!(Energy::from_base(250.0), Energy::new::<joule>(250.0));
        assert_eq!(<Energy as Scalar>::zero(), Energy::new::<joule>(0.0));
        assert_eq!(Scalar::abs(-e), e);
        assert_relative_eq!(e.ratio(Energy::new::<joule>(500.0)), 3.0);
    }

    #[test]
    fn scalar_arithmetic_keeps_units() {
        let a = Energy::new::<joule>(2.0);
        let b = Energy::new::<joule>(0.5);

        let combined = a + b * 4.0 - b;

        assert_relative_eq!(combined.get::<joule>(), 3.5);
        assert!(combined > a);
    }

    #[test]
    fn length_arrays_are_vectors() {
        let x = [Length::new::<meter>(3.0), Length::new::<kilometer>(0.004)];

        assert_eq!(x.dimension(), 2);
        assert_relative_eq!(x.norm(), 5.0);

        let moved = x.translate(&[Length::new::<meter>(1.0), Length::new::<meter>(-4.0)]);
        assert_relative_eq!(moved[0].get::<meter>(), 4.0);
        assert_relative_eq!(moved[1].get::<meter>(), 0.0);
    }

    #[test]
    fn force_pairs_with_length_as_energy() {
        let gradient = [Force::new::<newton>(2.0), Force::new::<newton>(-1.0)];
        let direction = [Length::new::<meter>(3.0), Length::new::<meter>(1.0)];

        let slope: Energy = pair(&gradient, &direction);

        assert_relative_eq!(slope.get::<joule>(), 5.0);
    }
}
