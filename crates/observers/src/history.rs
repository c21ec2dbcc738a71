use descent_core::Observer;

use crate::traits::{CanStopEarly, HasIterate, HasObjective};

/// The objective recorded at one iterate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Iterations completed when the objective was reported.
    pub iter: usize,

    /// The objective, in base units.
    pub objective: f64,
}

/// An observer that records the objective over the course of a run.
///
/// Events without an objective are ignored. With a limit set, the observer
/// asks the solver to stop once that many records have been collected.
///
/// Pass `&mut History` as the observer to inspect the records afterwards.
///
/// # Example
///
/// ```
/// use descent_core::FnObjective;
/// use descent_observers::History;
/// use descent_solvers::optimization::bfgs;
///
/// let bowl = FnObjective::new(
///     |x: &[f64; 2]| x[0] * x[0] + 4.0 * x[1] * x[1],
///     |x: &[f64; 2]| [2.0 * x[0], 8.0 * x[1]],
/// );
/// let config = bfgs::Config::new(1e-8, 10.0).unwrap();
///
/// let mut history = History::new();
/// bfgs::minimize(&bowl, &[1.0, 1.0], &config, &mut history).unwrap();
///
/// let best = history.best().unwrap();
/// assert!(best.objective < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    records: Vec<Record>,
    limit: Option<usize>,
}

impl History {
    /// Creates an empty history without a limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the solver once `limit` records have been collected.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the records in the order they were observed.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the record with the lowest objective.
    #[must_use]
    pub fn best(&self) -> Option<&Record> {
        self.records
            .iter()
            .min_by(|a, b| a.objective.total_cmp(&b.objective))
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the history, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    fn record<E: HasIterate + HasObjective>(&mut self, event: &E) -> bool {
        let objective = event.objective();
        if objective.is_nan() {
            return false;
        }
        self.records.push(Record {
            iter: event.iter(),
            objective,
        });
        self.limit.is_some_and(|limit| self.records.len() >= limit)
    }
}

impl<E, A> Observer<E, A> for History
where
    E: HasIterate + HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event).then(A::stop_early)
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the records can be read after the run completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: HasIterate + HasObjective,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
