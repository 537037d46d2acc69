//! Linear-algebra primitives the estimators depend on.
//!
//! The estimators never touch a numeric library directly; they are generic
//! over [`LinearAlgebra`] and default to [`FaerBackend`].

mod faer_backend;
mod traits;

pub use faer_backend::FaerBackend;
pub use traits::LinearAlgebra;

use crate::solvers::RegressionError;
use faer::Col;

/// Z-scores of `values` using the default backend.
///
/// Fails with [`RegressionError::ZeroVariance`] on constant input.
pub fn standardize(values: &Col<f64>) -> Result<Col<f64>, RegressionError> {
    FaerBackend.standardize(values, 0.0)
}

/// Pearson correlation of `a` and `b` using the default backend.
///
/// Fails with [`RegressionError::LengthMismatch`] when the lengths differ.
pub fn correlate(a: &Col<f64>, b: &Col<f64>) -> Result<f64, RegressionError> {
    FaerBackend.correlate(a, b, 0.0)
}
