//! The linear-algebra capability the estimators are written against.

use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// Vector and matrix primitives used by the estimators.
///
/// Implementors supply the arithmetic; the statistical helpers
/// ([`standardize`](LinearAlgebra::standardize) and
/// [`correlate`](LinearAlgebra::correlate)) are provided on top of it, so a
/// substitute backend only has to get the primitives right.
pub trait LinearAlgebra {
    /// Arithmetic mean of `values`.
    fn mean(&self, values: &Col<f64>) -> f64;

    /// Population standard deviation (divisor `n`) of `values`.
    fn std_dev(&self, values: &Col<f64>) -> f64;

    /// Inner product of two vectors of equal length.
    fn dot(&self, a: &Col<f64>, b: &Col<f64>) -> Result<f64, RegressionError>;

    /// Transpose of `a`.
    fn transpose(&self, a: &Mat<f64>) -> Mat<f64>;

    /// Matrix product `a * b`.
    fn matmul(&self, a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>, RegressionError>;

    /// Matrix-vector product `a * v`.
    fn mat_vec(&self, a: &Mat<f64>, v: &Col<f64>) -> Result<Col<f64>, RegressionError>;

    /// Inverse of the square matrix `a`.
    ///
    /// Fails with [`RegressionError::SingularMatrix`] when `a` is singular
    /// to within `tolerance`, read as a relative threshold so that
    /// rescaling the data does not change the outcome.
    fn inverse(&self, a: &Mat<f64>, tolerance: f64) -> Result<Mat<f64>, RegressionError>;

    /// Copy of column `j` of `x`.
    fn column(&self, x: &Mat<f64>, j: usize) -> Col<f64> {
        Col::from_fn(x.nrows(), |i| x[(i, j)])
    }

    /// Mean of each column of `x`.
    fn column_means(&self, x: &Mat<f64>) -> Col<f64> {
        Col::from_fn(x.ncols(), |j| self.mean(&self.column(x, j)))
    }

    /// Z-scores of `values`: `(x - mean) / std_dev`.
    ///
    /// Fails with [`RegressionError::ZeroVariance`] when the standard
    /// deviation is not above `variance_tolerance`, or is no larger than the
    /// rounding error of the mean (a constant input such as `0.1` whose
    /// computed spread is not exactly zero).
    fn standardize(
        &self,
        values: &Col<f64>,
        variance_tolerance: f64,
    ) -> Result<Col<f64>, RegressionError> {
        if values.nrows() == 0 {
            return Err(RegressionError::EmptyInput);
        }

        let mean = self.mean(values);
        let std = self.std_dev(values);
        let rounding_floor = values.nrows() as f64 * f64::EPSILON * mean.abs();
        if !std.is_finite() || std <= variance_tolerance.max(rounding_floor) {
            return Err(RegressionError::ZeroVariance);
        }

        Ok(Col::from_fn(values.nrows(), |i| (values[i] - mean) / std))
    }

    /// Pearson correlation computed as the mean product of z-scores.
    fn correlate(
        &self,
        a: &Col<f64>,
        b: &Col<f64>,
        variance_tolerance: f64,
    ) -> Result<f64, RegressionError> {
        if a.nrows() != b.nrows() {
            return Err(RegressionError::LengthMismatch {
                left: a.nrows(),
                right: b.nrows(),
            });
        }

        let za = self.standardize(a, variance_tolerance)?;
        let zb = self.standardize(b, variance_tolerance)?;

        Ok(self.dot(&za, &zb)? / a.nrows() as f64)
    }
}
