use super::LinalgError;
use ndarray::{Array1, Array2};

use rulinalg::matrix::decomposition::PartialPivLu;
use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

/// Solves `mat x = rhs` with the pure-Rust LU decomposition of `rulinalg`.
pub fn lu_solve(mat: &Array2<f64>, rhs: &Array1<f64>) -> Result<Array1<f64>, LinalgError> {
    let (rows, cols) = mat.dim();
    // iter() walks in logical row-major order regardless of memory layout
    let mat = Matrix::new(rows, cols, mat.iter().copied().collect::<Vec<f64>>());
    let mat_fact = PartialPivLu::decompose(mat)
        .map_err(|err| LinalgError::Factorization(err.to_string()))?;
    let sol = mat_fact
        .solve(Vector::new(rhs.to_vec()))
        .map_err(|_| LinalgError::Singular)?;
    Ok(Array1::from(sol.into_vec()))
}
