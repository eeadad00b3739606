use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Acceptance test of the backtracking line search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSearch {
    /// Accept `a` once `max|grad(x + a dx)| <= (1 - sigma a) max|grad(x)|`.
    ///
    /// This measures progress on the stationarity condition instead of the
    /// objective, so the objective may increase along the iterates.
    GradientNorm,
    /// Accept `a` once `f(x + a dx) <= f(x) + sigma a grad(x)·dx` (Armijo).
    Objective,
}

/// Parameters of Newton's method
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Step tolerance on `a max|dx|`
    pub xtol: f64,
    /// Gradient tolerance on `max|grad(x)|`
    pub gtol: f64,
    /// Maximum number of Newton steps
    pub max_iter: usize,
    /// Frequency of logging (`0` for no logging)
    pub verbose: usize,
    /// Sufficient decrease constant of the line search
    pub sigma: f64,
    /// Factor by which the step size shrinks on each rejected trial
    pub eta: f64,
    /// Maximum number of trial steps per line search
    pub max_back_steps: usize,
    /// Acceptance test of the line search
    pub line_search: LineSearch,
    /// Time limit (in seconds)
    pub time_limit: f64,
}

impl Params {
    const DEFAULT_XTOL: f64 = 1e-8;
    const DEFAULT_GTOL: f64 = 1e-8;
    const DEFAULT_MAX_ITER: usize = 100;
    const DEFAULT_SIGMA: f64 = 0.01;
    const DEFAULT_ETA: f64 = 0.9;
    const DEFAULT_MAX_BACK_STEPS: usize = 100;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            xtol: Self::DEFAULT_XTOL,
            gtol: Self::DEFAULT_GTOL,
            max_iter: Self::DEFAULT_MAX_ITER,
            verbose: 0,
            sigma: Self::DEFAULT_SIGMA,
            eta: Self::DEFAULT_ETA,
            max_back_steps: Self::DEFAULT_MAX_BACK_STEPS,
            line_search: LineSearch::GradientNorm,
            time_limit: f64::INFINITY,
        }
    }

    /// Sets the step tolerance.
    pub fn with_xtol(mut self, xtol: f64) -> Self {
        self.xtol = xtol;
        self
    }

    /// Sets the gradient tolerance.
    pub fn with_gtol(mut self, gtol: f64) -> Self {
        self.gtol = gtol;
        self
    }

    /// Sets the maximum number of Newton steps.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the logging frequency.
    pub fn with_verbose(mut self, verbose: usize) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the sufficient decrease constant.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Sets the step reduction factor.
    pub fn with_eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    /// Sets the maximum number of trials per line search.
    pub fn with_max_back_steps(mut self, max_back_steps: usize) -> Self {
        self.max_back_steps = max_back_steps;
        self
    }

    /// Sets the acceptance test of the line search.
    pub fn with_line_search(mut self, line_search: LineSearch) -> Self {
        self.line_search = line_search;
        self
    }

    /// Sets the time limit (in seconds).
    pub fn with_time_limit(mut self, time_limit: f64) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Checks that all values are in their admissible ranges.
    pub fn validate<E>(&self) -> Result<(), SolveError<E>> {
        fn invalid<E>(name: &'static str, value: f64, reason: &'static str) -> SolveError<E> {
            SolveError::InvalidParam {
                name,
                value,
                reason,
            }
        }
        if self.xtol.is_nan() || self.xtol < 0.0 {
            return Err(invalid("xtol", self.xtol, "must be non-negative"));
        }
        if self.gtol.is_nan() || self.gtol < 0.0 {
            return Err(invalid("gtol", self.gtol, "must be non-negative"));
        }
        if self.max_iter == 0 {
            return Err(invalid("max_iter", 0.0, "must be positive"));
        }
        if !(0.0..1.0).contains(&self.sigma) {
            return Err(invalid("sigma", self.sigma, "must lie in [0, 1)"));
        }
        if !(self.eta > 0.0 && self.eta < 1.0) {
            return Err(invalid("eta", self.eta, "must lie in (0, 1)"));
        }
        if self.max_back_steps == 0 {
            return Err(invalid("max_back_steps", 0.0, "must be positive"));
        }
        if self.time_limit.is_nan() {
            return Err(invalid("time_limit", self.time_limit, "must not be NaN"));
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hessian::LinalgError;

    #[test]
    fn defaults_are_valid() {
        assert!(Params::new().validate::<LinalgError>().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = Params::new()
            .with_gtol(-1.0)
            .validate::<LinalgError>()
            .unwrap_err();
        assert!(matches!(err, SolveError::InvalidParam { name: "gtol", .. }));

        let err = Params::new()
            .with_xtol(f64::NAN)
            .validate::<LinalgError>()
            .unwrap_err();
        assert!(matches!(err, SolveError::InvalidParam { name: "xtol", .. }));

        let err = Params::new()
            .with_gtol(f64::NAN)
            .validate::<LinalgError>()
            .unwrap_err();
        assert!(matches!(err, SolveError::InvalidParam { name: "gtol", .. }));
        assert!(Params::new().with_xtol(0.0).validate::<LinalgError>().is_ok());

        let err = Params::new()
            .with_max_iter(0)
            .validate::<LinalgError>()
            .unwrap_err();
        assert!(matches!(err, SolveError::InvalidParam { name: "max_iter", .. }));

        let err = Params::new()
            .with_eta(1.0)
            .validate::<LinalgError>()
            .unwrap_err();
        assert!(matches!(err, SolveError::InvalidParam { name: "eta", .. }));

        let err = Params::new()
            .with_sigma(1.0)
            .validate::<LinalgError>()
            .unwrap_err();
        assert!(matches!(err, SolveError::InvalidParam { name: "sigma", .. }));
    }
}
