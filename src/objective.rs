//! Objective functions together with their first and second derivatives
use crate::hessian::Hessian;
use ndarray::Array1;

/// Smooth objective function with gradient and Hessian oracles
pub trait Objective {
    /// Representation of the second derivative
    type Hessian: Hessian;

    /// Returns the objective value at `x`.
    fn value(&self, x: &Array1<f64>) -> f64;
    /// Returns the gradient at `x`.
    fn gradient(&self, x: &Array1<f64>) -> Array1<f64>;
    /// Returns the Hessian at `x`.
    fn hessian(&self, x: &Array1<f64>) -> Self::Hessian;
}

/// An [`Objective`] assembled from three callables
pub struct FnObjective<F, G, HF> {
    fun: F,
    grad: G,
    hess: HF,
}

impl<F, G, HF, H> FnObjective<F, G, HF>
where
    F: Fn(&Array1<f64>) -> f64,
    G: Fn(&Array1<f64>) -> Array1<f64>,
    HF: Fn(&Array1<f64>) -> H,
    H: Hessian,
{
    /// Wraps the objective `fun`, its gradient `grad` and its Hessian `hess`.
    pub fn new(fun: F, grad: G, hess: HF) -> Self {
        FnObjective { fun, grad, hess }
    }
}

impl<F, G, HF, H> Objective for FnObjective<F, G, HF>
where
    F: Fn(&Array1<f64>) -> f64,
    G: Fn(&Array1<f64>) -> Array1<f64>,
    HF: Fn(&Array1<f64>) -> H,
    H: Hessian,
{
    type Hessian = H;

    fn value(&self, x: &Array1<f64>) -> f64 {
        (self.fun)(x)
    }

    fn gradient(&self, x: &Array1<f64>) -> Array1<f64> {
        (self.grad)(x)
    }

    fn hessian(&self, x: &Array1<f64>) -> H {
        (self.hess)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hessian::Diagonal;
    use ndarray::array;

    #[test]
    fn forwards_to_callables() {
        let problem = FnObjective::new(
            |x: &Array1<f64>| x.mapv(f64::exp).sum(),
            |x: &Array1<f64>| x.mapv(f64::exp),
            |x: &Array1<f64>| Diagonal(x.mapv(f64::exp)),
        );
        let x = array![0.0, 0.0];
        assert_eq!(problem.value(&x), 2.0);
        assert_eq!(problem.gradient(&x), array![1.0, 1.0]);
        assert_eq!(problem.hessian(&x), Diagonal(array![1.0, 1.0]));
    }
}
