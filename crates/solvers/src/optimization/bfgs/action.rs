/// Actions an observer can take during a BFGS run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest accepted iterate.
    StopEarly,
}
