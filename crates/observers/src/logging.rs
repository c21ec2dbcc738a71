use descent_core::Observer;

use crate::traits::{HasIterate, HasObjective};

/// An observer that reports each event through the `log` facade.
///
/// Events are logged with their iteration counter and, when present, their
/// objective value. The observer never requests an action, so it does not
/// change the outcome of a run.
///
/// # Example
///
/// ```
/// use descent_core::FnObjective;
/// use descent_observers::LogObserver;
/// use descent_solvers::optimization::bfgs;
///
/// let bowl = FnObjective::new(|x: &f64| x * x, |x: &f64| 2.0 * x);
/// let config = bfgs::Config::new(1e-6, 10.0).unwrap();
///
/// let solution = bfgs::minimize(&bowl, &1.0, &config, LogObserver::default()).unwrap();
/// assert!(solution.is_converged());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: log::Level,
    target: &'static str,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: log::Level) -> Self {
        Self {
            level,
            target: module_path!(),
        }
    }

    /// Sets the log target.
    #[must_use]
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.level
    }

    /// Returns the log target.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(log::Level::Debug)
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIterate + HasObjective,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let objective = event.objective();
        if objective.is_nan() {
            log::log!(target: self.target, self.level, "iter {}", event.iter());
        } else {
            log::log!(
                target: self.target,
                self.level,
                "iter {}: objective {objective:e}",
                event.iter()
            );
        }
        None
    }
}
