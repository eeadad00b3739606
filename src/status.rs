use ndarray::Array1;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Possible outcomes of an optimization routine
pub enum StatusCode {
    /// Gradient or step tolerance met
    Optimal,
    /// Maximum number of iterations reached
    MaxSteps,
    /// Time limit reached
    TimeLimit,
    /// Stopped by the callback function
    Callback,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Final point of a Newton solve together with the derivatives evaluated there
pub struct Solution<H> {
    x: Array1<f64>,
    success: bool,
    code: StatusCode,
    fun: f64,
    jac: Array1<f64>,
    hess: H,
    niter: usize,
    gnorm: f64,
    xdiff: f64,
    time: f64,
}

impl<H> Solution<H> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        x: Array1<f64>,
        code: StatusCode,
        fun: f64,
        jac: Array1<f64>,
        hess: H,
        niter: usize,
        gnorm: f64,
        xdiff: f64,
        time: f64,
    ) -> Self {
        Solution {
            x,
            success: code == StatusCode::Optimal,
            code,
            fun,
            jac,
            hess,
            niter,
            gnorm,
            xdiff,
            time,
        }
    }

    /// Final parameter vector
    pub fn x(&self) -> &Array1<f64> {
        &self.x
    }

    /// Whether the gradient or the step tolerance was met
    pub fn success(&self) -> bool {
        self.success
    }

    /// Reason for termination
    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// Objective value at [`x`](Self::x)
    pub fn fun(&self) -> f64 {
        self.fun
    }

    /// Gradient at [`x`](Self::x)
    pub fn jac(&self) -> &Array1<f64> {
        &self.jac
    }

    /// Hessian at [`x`](Self::x)
    pub fn hess(&self) -> &H {
        &self.hess
    }

    /// Number of Newton steps taken
    pub fn niter(&self) -> usize {
        self.niter
    }

    /// Largest absolute entry of the final gradient
    pub fn gnorm(&self) -> f64 {
        self.gnorm
    }

    /// Largest absolute entry of the last accepted step (infinite if no step was taken)
    pub fn xdiff(&self) -> f64 {
        self.xdiff
    }

    /// Elapsed time (in seconds)
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Consumes the solution and returns the final parameter vector.
    pub fn into_x(self) -> Array1<f64> {
        self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_by_name() {
        let codes = [
            StatusCode::Optimal,
            StatusCode::MaxSteps,
            StatusCode::TimeLimit,
            StatusCode::Callback,
        ];
        let names: Vec<String> = codes
            .iter()
            .map(|code| serde_json::to_string(code).unwrap())
            .collect();
        assert_eq!(
            names,
            ["\"Optimal\"", "\"MaxSteps\"", "\"TimeLimit\"", "\"Callback\""]
        );
        assert!(serde_json::from_str::<StatusCode>("\"Initialized\"").is_err());
    }
}
