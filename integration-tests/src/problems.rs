pub mod springs {
    use std::convert::Infallible;

    use descent_core::Objective;
    use uom::si::{
        energy::joule,
        f64::{Energy, Force, Length},
        force::newton,
        length::meter,
    };

    /// A linear spring with zero rest length, fixed at one end.
    #[derive(Debug, Clone, Copy)]
    pub struct Spring {
        pub anchor: [Length; 2],

        /// Stiffness in newtons per meter.
        pub stiffness: f64,
    }

    /// A point mass held by springs under a constant load.
    ///
    /// The objective is the potential energy of the mass at a position; its
    /// gradient is the net restoring force, negated.
    #[derive(Debug, Clone)]
    pub struct SpringNetwork {
        pub springs: Vec<Spring>,
        pub load: [Force; 2],
    }

    impl SpringNetwork {
        /// Returns the position where the springs balance the load.
        #[must_use]
        pub fn equilibrium(&self) -> [Length; 2] {
            let total: f64 = self.springs.iter().map(|s| s.stiffness).sum();
            std::array::from_fn(|i| {
                let pull: f64 = self
                    .springs
                    .iter()
                    .map(|s| s.stiffness * s.anchor[i].get::<meter>())
                    .sum();
                Length::new::<meter>((pull + self.load[i].get::<newton>()) / total)
            })
        }
    }

    impl Objective for SpringNetwork {
        type Argument = [Length; 2];
        type Value = Energy;
        type Gradient = [Force; 2];
        type Error = Infallible;

        fn value(&self, x: &[Length; 2]) -> Result<Energy, Infallible> {
            let stored: f64 = self
                .springs
                .iter()
                .map(|s| {
                    let dx = (x[0] - s.anchor[0]).get::<meter>();
                    let dy = (x[1] - s.anchor[1]).get::<meter>();
                    0.5 * s.stiffness * (dx * dx + dy * dy)
                })
                .sum();
            let work = self.load[0].get::<newton>() * x[0].get::<meter>()
                + self.load[1].get::<newton>() * x[1].get::<meter>();
            Ok(Energy::new::<joule>(stored - work))
        }

        fn gradient(&self, x: &[Length; 2]) -> Result<[Force; 2], Infallible> {
            Ok(std::array::from_fn(|i| {
                let restoring: f64 = self
                    .springs
                    .iter()
                    .map(|s| s.stiffness * (x[i] - s.anchor[i]).get::<meter>())
                    .sum();
                Force::new::<newton>(restoring - self.load[i].get::<newton>())
            }))
        }
    }
}

pub mod landmarks {
    use descent_core::{Objective, Position};
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("position {0:?} lies outside the survey area")]
    pub struct OutsideSurvey(pub [f64; 2]);

    /// Sum of squared distances to a set of landmarks.
    ///
    /// Positions are affine points, so the solver only ever subtracts and
    /// translates them. The objective is defined only inside a square survey
    /// area centered on the origin.
    #[derive(Debug, Clone)]
    pub struct Landmarks {
        pub points: Vec<[f64; 2]>,
        pub half_width: f64,
    }

    impl Landmarks {
        /// Returns the landmarks' centroid, where the objective is smallest.
        #[must_use]
        pub fn centroid(&self) -> [f64; 2] {
            let n = self.points.len() as f64;
            let sum = self
                .points
                .iter()
                .fold([0.0, 0.0], |acc, p| [acc[0] + p[0], acc[1] + p[1]]);
            [sum[0] / n, sum[1] / n]
        }

        fn check(&self, x: &Position<[f64; 2]>) -> Result<[f64; 2], OutsideSurvey> {
            let x = *x.from_origin();
            if x.iter().all(|c| c.abs() <= self.half_width) {
                Ok(x)
            } else {
                Err(OutsideSurvey(x))
            }
        }
    }

    impl Objective for Landmarks {
        type Argument = Position<[f64; 2]>;
        type Value = f64;
        type Gradient = [f64; 2];
        type Error = OutsideSurvey;

        fn value(&self, x: &Position<[f64; 2]>) -> Result<f64, OutsideSurvey> {
            let x = self.check(x)?;
            Ok(self
                .points
                .iter()
                .map(|p| (x[0] - p[0]).powi(2) + (x[1] - p[1]).powi(2))
                .sum())
        }

        fn gradient(&self, x: &Position<[f64; 2]>) -> Result<[f64; 2], OutsideSurvey> {
            let x = self.check(x)?;
            Ok(self.points.iter().fold([0.0, 0.0], |acc, p| {
                [acc[0] + 2.0 * (x[0] - p[0]), acc[1] + 2.0 * (x[1] - p[1])]
            }))
        }
    }
}

pub mod rosenbrock {
    use std::convert::Infallible;

    use descent_core::Objective;

    /// The extended Rosenbrock function, minimized at `(1, 1, …, 1)`.
    #[derive(Debug, Clone, Copy)]
    pub struct Rosenbrock;

    impl Objective for Rosenbrock {
        type Argument = Vec<f64>;
        type Value = f64;
        type Gradient = Vec<f64>;
        type Error = Infallible;

        fn value(&self, x: &Vec<f64>) -> Result<f64, Infallible> {
            Ok(x.windows(2)
                .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
                .sum())
        }

        fn gradient(&self, x: &Vec<f64>) -> Result<Vec<f64>, Infallible> {
            let mut gradient = vec![0.0; x.len()];
            for (i, w) in x.windows(2).enumerate() {
                let bend = w[1] - w[0] * w[0];
                gradient[i] += -400.0 * w[0] * bend - 2.0 * (1.0 - w[0]);
                gradient[i + 1] += 200.0 * bend;
            }
            Ok(gradient)
        }
    }
}
