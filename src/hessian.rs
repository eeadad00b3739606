//! Representations of second derivatives that can solve linear systems
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "lapack")]
mod lapack;
#[cfg(not(feature = "lapack"))]
mod nolapack;

/// Second derivative of an objective at a particular point.
///
/// The solver never reads entries of the Hessian. It only asks for the
/// solution `v` of `H v = rhs`, so a Hessian may be a factorization, a
/// structured matrix or an iterative solver.
pub trait Hessian {
    /// Error raised when the system cannot be solved
    type Error;

    /// Solves `H v = rhs` for `v`.
    fn solve(&self, rhs: &Array1<f64>) -> Result<Array1<f64>, Self::Error>;

    /// Returns the number of rows if it is known.
    fn dim(&self) -> Option<usize> {
        None
    }
}

/// Errors of the provided Hessian representations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinalgError {
    /// The matrix has a different number of rows and columns.
    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },
    /// The right-hand side does not fit the matrix.
    #[error("right-hand side has length {found}, expected {expected}")]
    DimensionMismatch {
        /// Dimension of the matrix
        expected: usize,
        /// Length of the right-hand side
        found: usize,
    },
    /// The matrix is singular to working precision.
    #[error("matrix is singular")]
    Singular,
    /// The linear algebra backend reported a failure.
    #[error("factorization failed: {0}")]
    Factorization(String),
}

fn check_rhs(expected: usize, rhs: &Array1<f64>) -> Result<(), LinalgError> {
    if rhs.len() == expected {
        Ok(())
    } else {
        Err(LinalgError::DimensionMismatch {
            expected,
            found: rhs.len(),
        })
    }
}

fn check_finite(sol: Array1<f64>) -> Result<Array1<f64>, LinalgError> {
    if sol.iter().all(|v| v.is_finite()) {
        Ok(sol)
    } else {
        Err(LinalgError::Singular)
    }
}

/// The identity matrix of any size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity;

impl Hessian for Identity {
    type Error = LinalgError;

    fn solve(&self, rhs: &Array1<f64>) -> Result<Array1<f64>, LinalgError> {
        Ok(rhs.clone())
    }
}

/// A diagonal matrix given by its diagonal entries
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagonal(pub Array1<f64>);

impl Hessian for Diagonal {
    type Error = LinalgError;

    fn solve(&self, rhs: &Array1<f64>) -> Result<Array1<f64>, LinalgError> {
        check_rhs(self.0.len(), rhs)?;
        if self.0.iter().any(|&d| d == 0.0) {
            return Err(LinalgError::Singular);
        }
        check_finite(rhs / &self.0)
    }

    fn dim(&self) -> Option<usize> {
        Some(self.0.len())
    }
}

/// A dense square matrix solved by LU decomposition with partial pivoting
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dense(pub Array2<f64>);

impl Hessian for Dense {
    type Error = LinalgError;

    fn solve(&self, rhs: &Array1<f64>) -> Result<Array1<f64>, LinalgError> {
        let (rows, cols) = self.0.dim();
        if rows != cols {
            return Err(LinalgError::NotSquare { rows, cols });
        }
        check_rhs(rows, rhs)?;
        #[cfg(feature = "lapack")]
        let sol = lapack::lu_solve(&self.0, rhs)?;
        #[cfg(not(feature = "lapack"))]
        let sol = nolapack::lu_solve(&self.0, rhs)?;
        check_finite(sol)
    }

    fn dim(&self) -> Option<usize> {
        Some(self.0.nrows())
    }
}
