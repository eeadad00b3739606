//! Minimize smooth functions with a damped Newton's method.
//!
//! The Hessian is only ever used through [`Hessian::solve`], so callers may
//! supply factorized, structured or matrix-free representations.
#![warn(missing_docs)]

#[cfg(feature = "wasm")]
#[macro_use]
mod console;

mod error;
pub mod hessian;
mod max;
pub mod newton;
pub mod objective;
mod status;
mod time;

pub use crate::error::SolveError;
pub use crate::hessian::{Dense, Diagonal, Hessian, Identity, LinalgError};
pub use crate::newton::{Iterate, LineSearch, NewtonSolver, Params};
pub use crate::objective::{FnObjective, Objective};
pub use crate::status::{Solution, StatusCode};
