use thiserror::Error;

/// Reasons for [`minimize`](crate::NewtonSolver::minimize) to give up before
/// running a single step, or while computing a Newton direction.
///
/// Running out of iterations is not an error, see [`Solution::success`](crate::Solution::success).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError<E> {
    /// The Hessian failed to solve for the Newton direction. The error is
    /// passed through exactly as the Hessian implementation raised it.
    #[error(transparent)]
    Hessian(E),

    /// A solver parameter is outside of its admissible range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParam {
        /// Name of the field in [`Params`](crate::Params)
        name: &'static str,
        /// Offending value
        value: f64,
        /// What the value has to satisfy
        reason: &'static str,
    },

    /// The initial point contains `NaN` or an infinite entry.
    #[error("initial point has non-finite entry {value} at index {index}")]
    NonFiniteStart {
        /// Position of the entry
        index: usize,
        /// Offending value
        value: f64,
    },

    /// The initial point has no entries.
    #[error("initial point is empty")]
    EmptyStart,

    /// A vector returned by an oracle does not have the length of `x`.
    #[error("{what} has length {found}, expected {expected}")]
    DimensionMismatch {
        /// Which vector was off
        what: &'static str,
        /// Length of the parameter vector
        expected: usize,
        /// Length actually returned
        found: usize,
    },
}

impl<E> SolveError<E> {
    pub(crate) fn check_len(
        what: &'static str,
        expected: usize,
        found: usize,
    ) -> Result<(), SolveError<E>> {
        if expected == found {
            Ok(())
        } else {
            Err(SolveError::DimensionMismatch {
                what,
                expected,
                found,
            })
        }
    }
}
