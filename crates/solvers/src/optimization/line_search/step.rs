use descent_core::Scalar;

/// How far a returned step length can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Certificate {
    /// The step satisfies the strong Wolfe conditions.
    StrongWolfe,

    /// The objective became numerically constant while zooming.
    ///
    /// Two consecutive zoom trials produced identical values, so further
    /// refinement cannot make progress.
    Stagnated,

    /// The zoom phase reached its iteration limit.
    ///
    /// The step is the low end of the final bracket, which satisfies the
    /// sufficient-decrease condition but not necessarily the curvature one.
    ZoomLimit,

    /// The bracketing phase could not grow the step any further.
    ///
    /// Either the doubling limit was reached or the next trial step would not
    /// be finite. The step is the last trial that passed the bracketing tests.
    GrowthLimit,
}

/// The outcome of a line search along `x + α p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<S> {
    /// The chosen step length `α`.
    pub alpha: f64,

    /// The objective at the chosen step, `ϕ(α)`.
    pub value: S,

    /// The objective at the start of the search, `ϕ(0)`.
    pub initial_value: S,

    /// The directional derivative at the start of the search, `ϕ'(0)`.
    pub initial_slope: S,

    /// Whether the step is certified by the strong Wolfe conditions.
    pub certificate: Certificate,
}

impl<S> Step<S> {
    /// Returns true if the step satisfies the strong Wolfe conditions.
    #[must_use]
    pub fn satisfies_strong_wolfe(&self) -> bool {
        self.certificate == Certificate::StrongWolfe
    }
}

/// The strong Wolfe conditions for one search, anchored at `α = 0`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Conditions<S> {
    initial_value: S,
    initial_slope: S,
    c1: f64,
    c2: f64,
}

impl<S: Scalar> Conditions<S> {
    pub(super) fn new(initial_value: S, initial_slope: S, c1: f64, c2: f64) -> Self {
        Self {
            initial_value,
            initial_slope,
            c1,
            c2,
        }
    }

    /// Returns true if `ϕ(α) > ϕ(0) + c₁ α ϕ'(0)`.
    pub(super) fn exceeds_armijo(&self, alpha: f64, value: S) -> bool {
        value > self.initial_value + self.initial_slope * (self.c1 * alpha)
    }

    /// Returns true if `|ϕ'(α)| ≤ -c₂ ϕ'(0)`.
    pub(super) fn meets_curvature(&self, slope: S) -> bool {
        slope.abs() <= -(self.initial_slope * self.c2)
    }

    /// Packages a step length with the search's starting data.
    pub(super) fn step(&self, alpha: f64, value: S, certificate: Certificate) -> Step<S> {
        Step {
            alpha,
            value,
            initial_value: self.initial_value,
            initial_slope: self.initial_slope,
            certificate,
        }
    }
}
