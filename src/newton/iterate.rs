use ndarray::Array1;

/// Snapshot of the solver state between two Newton steps
#[derive(Clone, Debug)]
pub struct Iterate {
    /// Number of conducted Newton steps
    pub step: usize,
    /// Current parameter vector
    pub x: Array1<f64>,
    /// Objective value at `x`
    pub value: f64,
    /// Gradient at `x`
    pub g: Array1<f64>,
    /// Largest absolute entry of `g`
    pub gnorm: f64,
    /// Length of the last accepted step in the maximum norm
    pub xdiff: f64,
    /// Step size of the last line search
    pub stepsize: f64,
    /// Number of rejected trials in the last line search
    pub backsteps: usize,
    /// Elapsed time (in seconds)
    pub time: f64,
}

impl Iterate {
    pub(crate) fn new(x: Array1<f64>, value: f64, g: Array1<f64>, gnorm: f64) -> Self {
        Iterate {
            step: 0,
            x,
            value,
            g,
            gnorm,
            xdiff: f64::INFINITY,
            stepsize: 0.0,
            backsteps: 0,
            time: 0.0,
        }
    }
}
