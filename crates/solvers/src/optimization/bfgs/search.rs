use descent_core::{Objective, Observer, Point, Scalar, Vector};

use crate::optimization::{
    evaluate::gradient,
    line_search::{self, Step},
};

use super::{
    AbortReason, Action, Config, Error, Event, InverseHessian, Solution, Status,
    state::{Sense, State, dual, secant},
};

/// Core BFGS implementation.
///
/// Always minimizes `objective`. Events are typed by the caller's objective
/// `O`, and `sense` maps reported values back to it when `objective` is the
/// negation of the caller's.
pub(super) fn search<O, F, Obs>(
    objective: &F,
    x_start: &O::Argument,
    config: &Config,
    mut observer: Obs,
    sense: Sense,
) -> Result<Solution<O::Argument>, Error>
where
    O: Objective,
    F: Objective<Argument = O::Argument, Value = O::Value, Gradient = O::Gradient>,
    Obs: for<'a> Observer<Event<'a, O>, Action>,
{
    let start_gradient = gradient(objective, x_start)?;
    if start_gradient.is_zero() {
        log::debug!("bfgs: gradient vanishes at the starting point");
        return Ok(Solution {
            status: Status::Stationary,
            x: x_start.clone(),
            iters: 0,
        });
    }

    // Bootstrap with a steepest-descent step whose length is the tolerance.
    let direction =
        dual::<F>(&start_gradient).scaled(-config.tolerance() / start_gradient.norm());
    let step = line_search::search(
        objective,
        x_start,
        &direction,
        &start_gradient,
        config.line_search(),
    )?;
    let x = x_start.translate(&direction.scaled(step.alpha));

    let distance = x.difference(x_start).norm();
    if distance > config.radius() {
        return Err(out_of_trust_region(distance, config.radius(), 0));
    }

    let event: Event<'_, O> = Event::Bootstrapped {
        x: &x,
        step: &sense.step(&step),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(stopped(x, 0));
    }

    if !step.satisfies_strong_wolfe() {
        return Ok(aborted(x, AbortReason::LineSearch(step.certificate), 0));
    }

    let x_gradient = gradient(objective, &x)?;
    let pair = secant::<F>(x_start, &start_gradient, &x, &x_gradient);
    let curvature = pair.curvature();
    #[allow(clippy::float_cmp)]
    let stalled = pair.y.is_zero() || curvature == 0.0;
    if stalled {
        return Ok(aborted(x, AbortReason::StalledSecant, 0));
    }

    let scale = curvature / pair.y.norm_squared();
    let mut state = State::<F>::new(x, x_gradient, InverseHessian::scaled_identity(scale));

    for iter in 0..config.max_iters() {
        let distance = state.x().difference(x_start).norm();
        let direction = state.direction();
        let direction_norm = direction.norm();

        let event: Event<'_, O> = Event::Iteration {
            iter,
            x: state.x(),
            gradient: &sense.gradient(state.gradient()),
            direction_norm,
            distance,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(state.into_solution(Status::StoppedByObserver, iter));
        }

        if direction_norm <= config.tolerance() {
            log::debug!("bfgs: converged after {iter} iterations, step {direction_norm:e}");
            return Ok(state.into_solution(Status::Converged, iter));
        }

        let step = line_search::search(
            objective,
            state.x(),
            &direction,
            state.gradient(),
            config.line_search(),
        )?;
        if !step.satisfies_strong_wolfe() {
            let reason = AbortReason::LineSearch(step.certificate);
            log::debug!("bfgs: stopping after {iter} iterations: {reason:?}");
            return Ok(state.into_solution(Status::Aborted(reason), iter));
        }

        let x_next = state.x().translate(&direction.scaled(step.alpha));
        let gradient_next = gradient(objective, &x_next)?;
        let pair = secant::<F>(state.x(), state.gradient(), &x_next, &gradient_next);

        #[allow(clippy::float_cmp)]
        let stalled = pair.curvature() == 0.0;
        if stalled {
            log::debug!("bfgs: stopping after {iter} iterations: secant pair has no curvature");
            return Ok(state.into_solution(Status::Aborted(AbortReason::StalledSecant), iter));
        }

        state.advance(x_next, gradient_next, &pair);
        log_step(iter + 1, &step, sense);

        let distance = state.x().difference(x_start).norm();
        if distance > config.radius() {
            return Err(out_of_trust_region(distance, config.radius(), iter + 1));
        }

        let event: Event<'_, O> = Event::Stepped {
            iter: iter + 1,
            x: state.x(),
            step: &sense.step(&step),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(state.into_solution(Status::StoppedByObserver, iter + 1));
        }
    }

    log::debug!("bfgs: reached the limit of {} iterations", config.max_iters());
    Ok(state.into_solution(Status::MaxIters, config.max_iters()))
}

fn stopped<A>(x: A, iters: usize) -> Solution<A> {
    Solution {
        status: Status::StoppedByObserver,
        x,
        iters,
    }
}

fn aborted<A>(x: A, reason: AbortReason, iters: usize) -> Solution<A> {
    log::debug!("bfgs: bootstrap step could not seed the inverse Hessian: {reason:?}");
    Solution {
        status: Status::Aborted(reason),
        x,
        iters,
    }
}

fn out_of_trust_region(distance: f64, radius: f64, iters: usize) -> Error {
    log::warn!("bfgs: iterate is {distance:e} from the start, beyond the trust radius {radius:e}");
    Error::OutOfTrustRegion {
        distance,
        radius,
        iters,
    }
}

fn log_step<S: Scalar>(iter: usize, step: &Step<S>, sense: Sense) {
    log::debug!(
        "bfgs: step {iter} took alpha = {:e}, objective {:?} -> {:?}",
        step.alpha,
        sense.value(step.initial_value),
        sense.value(step.value),
    );
}
