use super::LinalgError;
use ndarray::{Array1, Array2};
use ndarray_linalg::{FactorizeInto, Solve};

/// Solves `mat x = rhs` with LAPACK's `getrf`/`getrs`.
pub fn lu_solve(mat: &Array2<f64>, rhs: &Array1<f64>) -> Result<Array1<f64>, LinalgError> {
    // getrf reports an exactly vanishing pivot as a computational failure
    let mat_fact = mat
        .clone()
        .factorize_into()
        .map_err(|_| LinalgError::Singular)?;
    mat_fact
        .solve_into(rhs.clone())
        .map_err(|err| LinalgError::Factorization(err.to_string()))
}
