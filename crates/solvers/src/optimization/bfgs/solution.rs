use crate::optimization::line_search::Certificate;

/// Why a run stopped before converging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The line search could not certify a strong Wolfe step.
    LineSearch(Certificate),

    /// The secant pair carried no curvature information (`s · y = 0`).
    StalledSecant,
}

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The quasi-Newton step fell within the tolerance.
    Converged,

    /// The gradient at the starting point is exactly zero.
    Stationary,

    /// Progress stalled; the point is the best effort so far.
    Aborted(AbortReason),

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a BFGS run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<A> {
    /// Final solver status.
    pub status: Status,

    /// The reported point.
    pub x: A,

    /// Quasi-Newton iterations completed.
    pub iters: usize,
}

impl<A> Solution<A> {
    /// Returns true if the solver reached a point it can vouch for.
    ///
    /// Converged and stationary runs qualify; every other status returns a
    /// best-effort point.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self.status, Status::Converged | Status::Stationary)
    }
}
