#[cfg(test)]
use std::cell::RefCell;

use descent_core::{Objective, Scalar};

use crate::optimization::evaluate::{EvalError, Ray};

use super::{
    Config, HERMITE_MARGIN,
    hermite::Hermite2,
    step::{Certificate, Conditions, Step},
};

#[cfg(test)]
thread_local! {
    static BRACKET_WIDTHS: RefCell<Vec<f64>> = const { RefCell::new(Vec::new()) };
}

/// Drains the widths of the brackets trials were taken from on this thread.
#[cfg(test)]
pub(super) fn take_bracket_widths() -> Vec<f64> {
    BRACKET_WIDTHS.with_borrow_mut(std::mem::take)
}

/// A step length with its objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Sample<S> {
    pub(super) alpha: f64,
    pub(super) value: S,
}

/// An interval of step lengths known to contain a strong Wolfe step.
///
/// The `lo` end has the lowest objective seen so far among steps satisfying
/// sufficient decrease, and its slope points toward `hi`. There is no
/// guarantee that `lo.alpha < hi.alpha`.
#[derive(Debug, Clone, Copy)]
pub(super) struct Bracket<S> {
    lo: Sample<S>,
    lo_slope: S,
    hi: Sample<S>,
}

impl<S: Scalar> Bracket<S> {
    pub(super) fn new(lo: Sample<S>, lo_slope: S, hi: Sample<S>) -> Self {
        Self { lo, lo_slope, hi }
    }

    pub(super) fn lo(&self) -> Sample<S> {
        self.lo
    }

    /// Returns the next trial step within the bracket.
    ///
    /// Uses the extremum of the local quadratic model when it falls safely
    /// inside the bracket. An extremum near either end would make zooming
    /// crawl, so in that case (and when there is no extremum) this bisects.
    ///
    /// # Panics
    ///
    /// Panics if the bracket has collapsed to a single point.
    pub(super) fn trial(&self) -> f64 {
        #[cfg(test)]
        BRACKET_WIDTHS.with_borrow_mut(|widths| widths.push(self.hi.alpha - self.lo.alpha));

        #[allow(clippy::float_cmp)]
        let degenerate = self.lo.alpha == self.hi.alpha;
        assert!(
            !degenerate,
            "zoom bracket collapsed to a single step length {}",
            self.lo.alpha
        );

        let (lo, hi) = (self.lo.alpha, self.hi.alpha);
        let margin = (hi - lo).abs() * HERMITE_MARGIN;
        let model = Hermite2::new([lo, hi], [self.lo.value, self.hi.value], self.lo_slope);

        match model.find_extremum() {
            Some(extremum) if lo.min(hi) + margin < extremum && extremum < lo.max(hi) - margin => {
                extremum
            }
            _ => 0.5 * (lo + hi),
        }
    }

    /// Replaces the `hi` end with a trial that failed to improve on `lo`.
    pub(super) fn replace_hi(&mut self, sample: Sample<S>) {
        self.hi = sample;
    }

    /// Moves the `lo` end to an improving trial with the given slope.
    ///
    /// If the slope at the trial points away from `hi`, the old `lo` becomes
    /// the new `hi` so the bracket keeps enclosing a minimizer.
    pub(super) fn advance_lo(&mut self, sample: Sample<S>, slope: S) {
        if slope * (self.hi.alpha - self.lo.alpha) >= S::zero() {
            self.hi = self.lo;
        }
        self.lo = sample;
        self.lo_slope = slope;
    }
}

/// Narrows a bracket to a single acceptable step length.
pub(super) fn zoom<O: Objective>(
    ray: &Ray<'_, O>,
    conditions: &Conditions<O::Value>,
    mut bracket: Bracket<O::Value>,
    config: &Config,
) -> Result<Step<O::Value>, EvalError<O::Error>> {
    let mut previous_value = None;

    for _ in 0..config.max_zoom_iters() {
        let alpha = bracket.trial();
        let value = ray.value(alpha)?;

        if previous_value == Some(value) {
            log::debug!("line search stagnated at alpha = {alpha}: objective is flat");
            return Ok(conditions.step(alpha, value, Certificate::Stagnated));
        }
        previous_value = Some(value);

        let sample = Sample { alpha, value };
        if conditions.exceeds_armijo(alpha, value) || value >= bracket.lo().value {
            bracket.replace_hi(sample);
            continue;
        }

        let slope = ray.slope(alpha)?;
        if conditions.meets_curvature(slope) {
            return Ok(conditions.step(alpha, value, Certificate::StrongWolfe));
        }
        bracket.advance_lo(sample, slope);
    }

    let lo = bracket.lo();
    log::debug!(
        "line search zoom hit its limit of {} iterations; keeping alpha = {}",
        config.max_zoom_iters(),
        lo.alpha
    );
    Ok(conditions.step(lo.alpha, lo.value, Certificate::ZoomLimit))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn sample(alpha: f64, value: f64) -> Sample<f64> {
        Sample { alpha, value }
    }

    #[test]
    fn trial_uses_interior_extremum() {
        // ϕ(α) = (α - 0.4)², bracket [0, 1].
        let bracket = Bracket::new(sample(0.0, 0.16), -0.8, sample(1.0, 0.36));

        assert_relative_eq!(bracket.trial(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn trial_bisects_when_extremum_hugs_an_end() {
        // ϕ(α) = (α - 0.995)², extremum within 1% of the right end.
        let phi = |alpha: f64| (alpha - 0.995_f64).powi(2);
        let bracket = Bracket::new(sample(0.0, phi(0.0)), -1.99, sample(1.0, phi(1.0)));

        assert_relative_eq!(bracket.trial(), 0.5);
    }

    #[test]
    fn trial_bisects_when_model_is_linear() {
        let bracket = Bracket::new(sample(2.0, 1.0), -1.0, sample(4.0, -1.0));

        assert_relative_eq!(bracket.trial(), 3.0);
    }

    #[test]
    fn trial_handles_reversed_bracket() {
        // ϕ(α) = (α - 1)², lo at 2 with slope 2 pointing toward hi at 0.
        let bracket = Bracket::new(sample(2.0, 1.0), 2.0, sample(0.0, 1.0));

        assert_relative_eq!(bracket.trial(), 1.0);
    }

    #[test]
    #[should_panic(expected = "collapsed")]
    fn degenerate_bracket_panics() {
        let bracket = Bracket::new(sample(1.0, 0.0), -1.0, sample(1.0, 0.0));
        bracket.trial();
    }

    #[test]
    fn advance_lo_keeps_a_minimizer_bracketed() {
        let mut bracket = Bracket::new(sample(0.0, 1.0), -1.0, sample(2.0, 3.0));

        // Slope at 1.0 is positive while hi lies to the right: old lo becomes hi.
        bracket.advance_lo(sample(1.0, 0.5), 0.3);
        assert_eq!(bracket.lo(), sample(1.0, 0.5));
        assert_eq!(bracket.hi, sample(0.0, 1.0));

        // Slope at 0.6 is positive and hi lies to the left: hi is kept.
        bracket.advance_lo(sample(0.6, 0.4), 0.2);
        assert_eq!(bracket.lo(), sample(0.6, 0.4));
        assert_eq!(bracket.hi, sample(0.0, 1.0));

        // Slope at 0.3 is negative while hi lies to the left: old lo becomes hi.
        bracket.advance_lo(sample(0.3, 0.35), -0.1);
        assert_eq!(bracket.lo(), sample(0.3, 0.35));
        assert_eq!(bracket.hi, sample(0.6, 0.4));
    }
}
