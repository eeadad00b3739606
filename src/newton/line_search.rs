use ndarray::Array1;
use tracing::{trace, warn};

use super::params::{LineSearch, Params};
use crate::max::max_abs;
use crate::objective::Objective;

/// Accepted point of a line search
pub struct Trial {
    pub stepsize: f64,
    pub backsteps: usize,
    pub x: Array1<f64>,
    pub g: Array1<f64>,
    pub gnorm: f64,
}

/// Backtracks along `dx` starting from the full step.
///
/// If none of the `max_back_steps` trials satisfies the acceptance test the
/// last one is taken anyway.
pub fn update_params<P: Objective>(
    problem: &P,
    x: &Array1<f64>,
    g: &Array1<f64>,
    gnorm: f64,
    value: f64,
    dx: &Array1<f64>,
    params: &Params,
) -> Trial {
    let pred_desc = g.dot(dx);
    let mut stepsize = 1.0;
    let mut backstep = 0;
    loop {
        let x_next = x + &(dx * stepsize);
        let g_next = problem.gradient(&x_next);
        let gnorm_next = max_abs(&g_next);
        let accept = match params.line_search {
            LineSearch::GradientNorm => gnorm_next <= (1.0 - params.sigma * stepsize) * gnorm,
            LineSearch::Objective => {
                problem.value(&x_next) <= value + params.sigma * stepsize * pred_desc
            }
        };
        trace!(backstep, stepsize, gnorm = gnorm_next, accept, "line search trial");
        if accept || backstep + 1 >= params.max_back_steps {
            if !accept {
                warn!(
                    trials = params.max_back_steps,
                    stepsize, "line search exhausted, taking last trial step"
                );
            }
            return Trial {
                stepsize,
                backsteps: backstep,
                x: x_next,
                g: g_next,
                gnorm: gnorm_next,
            };
        }
        stepsize *= params.eta;
        backstep += 1;
    }
}
