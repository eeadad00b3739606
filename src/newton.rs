//! Damped Newton's method
use ndarray::Array1;

use crate::error::SolveError;
use crate::hessian::Hessian;
use crate::objective::{FnObjective, Objective};
use crate::status::Solution;

mod iterate;
mod line_search;
mod params;
mod solve;

pub use self::iterate::Iterate;
pub use self::params::{LineSearch, Params};
pub use self::solve::solve;

/// Outcome of a Newton solve whose Hessians are of type `H`
pub type NewtonResult<H> = Result<Solution<H>, SolveError<<H as Hessian>::Error>>;

/// Minimizes an [`Objective`] with Newton's method.
///
/// ```
/// use ndarray::{array, Array1};
/// use ntsolver::{Identity, NewtonSolver, Params};
///
/// let solver = NewtonSolver::new(
///     |x: &Array1<f64>| 0.5 * x.dot(x),
///     |x: &Array1<f64>| x.clone(),
///     |_: &Array1<f64>| Identity,
/// );
/// let sol = solver
///     .minimize(&array![5.0, -3.0], &Params::new().with_max_iter(10))
///     .unwrap();
/// assert!(sol.success());
/// assert_eq!(sol.niter(), 1);
/// ```
pub struct NewtonSolver<P> {
    problem: P,
}

impl<F, G, HF, H> NewtonSolver<FnObjective<F, G, HF>>
where
    F: Fn(&Array1<f64>) -> f64,
    G: Fn(&Array1<f64>) -> Array1<f64>,
    HF: Fn(&Array1<f64>) -> H,
    H: Hessian,
{
    /// Creates a solver from the objective `fun`, its gradient `grad` and its Hessian `hess`.
    pub fn new(fun: F, grad: G, hess: HF) -> Self {
        Self::from_objective(FnObjective::new(fun, grad, hess))
    }
}

impl<P: Objective> NewtonSolver<P> {
    /// Creates a solver for an existing [`Objective`].
    pub fn from_objective(problem: P) -> Self {
        NewtonSolver { problem }
    }

    /// Returns the objective being minimized.
    pub fn objective(&self) -> &P {
        &self.problem
    }

    /// Minimizes the objective starting from `x0`.
    pub fn minimize(&self, x0: &Array1<f64>, params: &Params) -> NewtonResult<P::Hessian> {
        solve(&self.problem, x0, params, None)
    }

    /// Minimizes the objective starting from `x0`, consulting `callback`
    /// before every step. The solve stops as soon as `callback` returns `true`.
    pub fn minimize_with_callback(
        &self,
        x0: &Array1<f64>,
        params: &Params,
        callback: &dyn Fn(&Iterate) -> bool,
    ) -> NewtonResult<P::Hessian> {
        solve(&self.problem, x0, params, Some(callback))
    }
}
