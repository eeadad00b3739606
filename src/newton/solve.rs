use ndarray::Array1;
use tracing::debug;

use super::iterate::Iterate;
use super::line_search::update_params;
use super::params::Params;
use super::NewtonResult;
use crate::error::SolveError;
use crate::hessian::Hessian;
use crate::max::max_abs;
use crate::objective::Objective;
use crate::status::{Solution, StatusCode};
use crate::time;

type HessianError<P> = <<P as Objective>::Hessian as Hessian>::Error;

fn check_start<E>(x0: &Array1<f64>) -> Result<(), SolveError<E>> {
    if x0.is_empty() {
        return Err(SolveError::EmptyStart);
    }
    match x0.iter().position(|xi| !xi.is_finite()) {
        Some(index) => Err(SolveError::NonFiniteStart {
            index,
            value: x0[index],
        }),
        None => Ok(()),
    }
}

fn is_converged(iterate: &Iterate, params: &Params) -> bool {
    iterate.gnorm <= params.gtol || iterate.xdiff <= params.xtol
}

/// Uses Newton's method with backtracking to minimize `problem` starting from `x0`.
///
/// Each step solves `H dx = -g` with the Hessian at the current point and
/// shortens `dx` until the line search accepts it. The iteration stops once
/// the gradient or the step is small enough, or when `max_iter`, the time
/// limit or the callback ends it.
pub fn solve<P: Objective>(
    problem: &P,
    x0: &Array1<f64>,
    params: &Params,
    callback: Option<&dyn Fn(&Iterate) -> bool>,
) -> NewtonResult<P::Hessian> {
    params.validate::<HessianError<P>>()?;
    check_start::<HessianError<P>>(x0)?;
    let start = time::now();
    let n = x0.len();

    let x = x0.clone();
    let g = problem.gradient(&x);
    SolveError::<HessianError<P>>::check_len("gradient", n, g.len())?;
    let gnorm = max_abs(&g);
    let value = problem.value(&x);
    let mut iterate = Iterate::new(x, value, g, gnorm);

    if params.verbose > 0 {
        println!(
            "{:>10} {:>10} {:>12} {:>10} {:>10} {:>10} {:>4}",
            "step", "time", "objective", "gnorm", "xdiff", "stepsize", "back",
        )
    }

    let mut code = loop {
        let elapsed = time::until_now(start);
        iterate.time = elapsed;

        // handle step limit
        if iterate.step >= params.max_iter {
            break StatusCode::MaxSteps;
        }

        // handle time limit
        if params.time_limit > 0.0 && elapsed >= params.time_limit {
            break StatusCode::TimeLimit;
        }

        // handle callback
        if let Some(callback_fn) = callback {
            if callback_fn(&iterate) {
                break StatusCode::Callback;
            }
        }

        // compute Newton direction
        let hess = problem.hessian(&iterate.x);
        if let Some(dim) = hess.dim() {
            SolveError::<HessianError<P>>::check_len("Hessian", n, dim)?;
        }
        let dx = -hess.solve(&iterate.g).map_err(SolveError::Hessian)?;
        SolveError::<HessianError<P>>::check_len("Newton direction", n, dx.len())?;

        let trial = update_params(
            problem,
            &iterate.x,
            &iterate.g,
            iterate.gnorm,
            iterate.value,
            &dx,
            params,
        );
        SolveError::<HessianError<P>>::check_len("gradient", n, trial.g.len())?;
        iterate.xdiff = trial.stepsize * max_abs(&dx);
        iterate.stepsize = trial.stepsize;
        iterate.backsteps = trial.backsteps;
        iterate.x = trial.x;
        iterate.g = trial.g;
        iterate.gnorm = trial.gnorm;
        iterate.value = problem.value(&iterate.x);
        iterate.step += 1;
        iterate.time = time::until_now(start);

        let converged = is_converged(&iterate, params);
        debug!(
            step = iterate.step,
            value = iterate.value,
            gnorm = iterate.gnorm,
            xdiff = iterate.xdiff,
            stepsize = iterate.stepsize,
            backsteps = iterate.backsteps,
            "newton step"
        );

        // handle progress output
        if params.verbose > 0 && (iterate.step % params.verbose == 0 || converged) {
            println!(
                "{:10} {:10.2} {:12.6e} {:10.03e} {:10.03e} {:10.6} {:4}",
                iterate.step,
                iterate.time,
                iterate.value,
                iterate.gnorm,
                iterate.xdiff,
                iterate.stepsize,
                iterate.backsteps,
            )
        }

        // terminate
        if converged {
            break StatusCode::Optimal;
        }
    };

    // a tolerance met before an early stop still counts
    if is_converged(&iterate, params) {
        code = StatusCode::Optimal;
    }
    let hess = problem.hessian(&iterate.x);
    debug!(
        ?code,
        niter = iterate.step,
        gnorm = iterate.gnorm,
        xdiff = iterate.xdiff,
        "newton solve finished"
    );
    Ok(Solution::new(
        iterate.x,
        code,
        iterate.value,
        iterate.g,
        hess,
        iterate.step,
        iterate.gnorm,
        iterate.xdiff,
        time::until_now(start),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hessian::{Diagonal, Identity, LinalgError};
    use crate::objective::FnObjective;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn sphere() -> impl Objective<Hessian = Identity> {
        FnObjective::new(
            |x: &Array1<f64>| 0.5 * x.dot(x),
            |x: &Array1<f64>| x.clone(),
            |_: &Array1<f64>| Identity,
        )
    }

    // f(x) = sum(exp(x_i) - x_i), minimized at zero
    fn exp_sum() -> impl Objective<Hessian = Diagonal> {
        FnObjective::new(
            |x: &Array1<f64>| x.mapv(|xi| xi.exp() - xi).sum(),
            |x: &Array1<f64>| x.mapv(|xi| xi.exp() - 1.0),
            |x: &Array1<f64>| Diagonal(x.mapv(f64::exp)),
        )
    }

    #[test]
    fn sphere_in_one_step() {
        let params = Params::new().with_max_iter(10);
        let sol = solve(&sphere(), &array![5.0, -3.0], &params, None).unwrap();
        assert!(sol.success());
        assert_eq!(sol.code(), StatusCode::Optimal);
        assert_eq!(sol.niter(), 1);
        assert_abs_diff_eq!(sol.x()[0], 0.0);
        assert_abs_diff_eq!(sol.x()[1], 0.0);
        assert_abs_diff_eq!(sol.fun(), 0.0);
        assert_abs_diff_eq!(sol.xdiff(), 5.0);
    }

    #[test]
    fn backtracks_far_from_the_minimum() {
        let params = Params::new().with_max_iter(1);
        let problem = exp_sum();
        let seen = std::cell::Cell::new(0);
        let callback = |it: &Iterate| {
            seen.set(it.step);
            false
        };
        let sol = solve(&problem, &array![-2.0], &params, Some(&callback)).unwrap();
        assert_eq!(sol.code(), StatusCode::MaxSteps);
        assert!(!sol.success());
        assert_eq!(sol.niter(), 1);
        assert_eq!(seen.get(), 0);
        // the full Newton step lands at e^2 - 3 and gets shortened 9 times
        let full = 2.0f64.exp() - 1.0;
        let stepsize = 0.9f64.powi(9);
        assert_abs_diff_eq!(sol.x()[0], -2.0 + stepsize * full, epsilon = 1e-12);
        assert_abs_diff_eq!(sol.xdiff(), stepsize * full, epsilon = 1e-12);
    }

    #[test]
    fn callback_stops_the_solve() {
        let params = Params::new();
        let stop = |it: &Iterate| it.step >= 2;
        let sol = solve(&exp_sum(), &array![-2.0], &params, Some(&stop)).unwrap();
        assert_eq!(sol.code(), StatusCode::Callback);
        assert!(!sol.success());
        assert_eq!(sol.niter(), 2);
    }

    #[test]
    fn rejects_bad_starting_points() {
        let params = Params::new();
        let err = solve(&sphere(), &array![1.0, f64::NAN], &params, None).unwrap_err();
        assert!(matches!(err, SolveError::NonFiniteStart { index: 1, .. }));
        let err = solve(&sphere(), &Array1::zeros(0), &params, None).unwrap_err();
        assert_eq!(err, SolveError::EmptyStart);
    }

    #[test]
    fn propagates_hessian_errors() {
        let problem = FnObjective::new(
            |x: &Array1<f64>| x.mapv(f64::abs).sum(),
            |x: &Array1<f64>| x.mapv(f64::signum),
            |x: &Array1<f64>| Diagonal(Array1::zeros(x.len())),
        );
        let err = solve(&problem, &array![1.0], &Params::new(), None).unwrap_err();
        assert_eq!(err, SolveError::Hessian(LinalgError::Singular));
    }
}
