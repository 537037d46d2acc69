//! Default backend built on `faer`.

use super::LinearAlgebra;
use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// [`LinearAlgebra`] implementation backed by `faer` matrices.
///
/// Inversion first scales `A` symmetrically to a unit diagonal,
/// `S = DAD` with `D = diag(1/√|a_ii|)`, so the singularity test does not
/// depend on the units of the data. `S` is then factored as `S = QR` and
/// `S⁻¹ = R⁻¹Qᵗ` is obtained by back-substituting each column of `Qᵗ`
/// through `R`. Finally `A⁻¹ = D S⁻¹ D`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaerBackend;

impl LinearAlgebra for FaerBackend {
    fn mean(&self, values: &Col<f64>) -> f64 {
        values.iter().sum::<f64>() / values.nrows() as f64
    }

    fn std_dev(&self, values: &Col<f64>) -> f64 {
        let n = values.nrows() as f64;
        let mean = self.mean(values);
        let ss: f64 = values.iter().map(|&v| (v - mean).powi(2)).sum();
        (ss / n).sqrt()
    }

    fn dot(&self, a: &Col<f64>, b: &Col<f64>) -> Result<f64, RegressionError> {
        if a.nrows() != b.nrows() {
            return Err(RegressionError::LengthMismatch {
                left: a.nrows(),
                right: b.nrows(),
            });
        }
        Ok(a.iter().zip(b.iter()).map(|(&ai, &bi)| ai * bi).sum())
    }

    fn transpose(&self, a: &Mat<f64>) -> Mat<f64> {
        a.transpose().to_owned()
    }

    fn matmul(&self, a: &Mat<f64>, b: &Mat<f64>) -> Result<Mat<f64>, RegressionError> {
        if a.ncols() != b.nrows() {
            return Err(RegressionError::InnerDimensionMismatch {
                left_cols: a.ncols(),
                right_rows: b.nrows(),
            });
        }
        Ok(a * b)
    }

    fn mat_vec(&self, a: &Mat<f64>, v: &Col<f64>) -> Result<Col<f64>, RegressionError> {
        if a.ncols() != v.nrows() {
            return Err(RegressionError::InnerDimensionMismatch {
                left_cols: a.ncols(),
                right_rows: v.nrows(),
            });
        }
        Ok(a * v)
    }

    fn inverse(&self, a: &Mat<f64>, tolerance: f64) -> Result<Mat<f64>, RegressionError> {
        if a.nrows() != a.ncols() {
            return Err(RegressionError::NotSquare {
                nrows: a.nrows(),
                ncols: a.ncols(),
            });
        }

        let size = a.nrows();

        // Jacobi scaling; rows with a zero diagonal are left as they are
        let mut scale = Col::<f64>::zeros(size);
        for i in 0..size {
            let d = a[(i, i)].abs();
            if !d.is_finite() {
                return Err(RegressionError::SingularMatrix);
            }
            scale[i] = if d > 0.0 { 1.0 / d.sqrt() } else { 1.0 };
        }
        let scaled = Mat::from_fn(size, size, |i, j| scale[i] * a[(i, j)] * scale[j]);

        let qr = scaled.qr();
        let q = qr.compute_Q();
        let r = qr.R();

        let max_pivot = (0..size).map(|i| r[(i, i)].abs()).fold(0.0, f64::max);
        for i in 0..size {
            let pivot = r[(i, i)].abs();
            if pivot.is_nan() || pivot <= tolerance * max_pivot {
                return Err(RegressionError::SingularMatrix);
            }
        }

        // Solve R * X = Q' for each column of the identity
        let qt = q.transpose();
        let mut inv = Mat::zeros(size, size);

        for col in 0..size {
            for i in (0..size).rev() {
                let mut sum = qt[(i, col)];
                for j in (i + 1)..size {
                    sum -= r[(i, j)] * inv[(j, col)];
                }
                inv[(i, col)] = sum / r[(i, i)];
            }
        }

        for i in 0..size {
            for j in 0..size {
                inv[(i, j)] *= scale[i] * scale[j];
            }
        }

        trace!("inverted {}x{} matrix", size, size);
        Ok(inv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_population_std() {
        let v = Col::from_fn(4, |i| [2.0, 4.0, 4.0, 6.0][i]);
        let backend = FaerBackend;

        assert!((backend.mean(&v) - 4.0).abs() < 1e-12);
        // population variance = (4 + 0 + 0 + 4) / 4 = 2
        assert!((backend.std_dev(&v) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_dot_length_mismatch() {
        let a = Col::from_fn(3, |i| i as f64);
        let b = Col::from_fn(2, |i| i as f64);

        let result = FaerBackend.dot(&a, &b);
        assert!(matches!(
            result,
            Err(RegressionError::LengthMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn test_transpose() {
        let a = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let at = FaerBackend.transpose(&a);

        assert_eq!(at.nrows(), 3);
        assert_eq!(at.ncols(), 2);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(at[(j, i)], a[(i, j)]);
            }
        }
    }

    #[test]
    fn test_matmul_inner_dimension_checked() {
        let a = Mat::<f64>::zeros(2, 3);
        let b = Mat::<f64>::zeros(2, 2);
        assert!(FaerBackend.matmul(&a, &b).is_err());
    }

    #[test]
    fn test_inverse_times_original_is_identity() {
        let mut a = Mat::zeros(3, 3);
        a[(0, 0)] = 4.0;
        a[(0, 1)] = 1.0;
        a[(0, 2)] = 2.0;
        a[(1, 0)] = 1.0;
        a[(1, 1)] = 3.0;
        a[(1, 2)] = 0.5;
        a[(2, 0)] = 2.0;
        a[(2, 1)] = 0.5;
        a[(2, 2)] = 5.0;

        let backend = FaerBackend;
        let inv = backend.inverse(&a, 1e-10).expect("matrix is invertible");
        let product = backend.matmul(&a, &inv).unwrap();

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((product[(i, j)] - expected).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_inverse_singular() {
        let a = Mat::from_fn(2, 2, |_, _| 3.0);
        let result = FaerBackend.inverse(&a, 1e-10);
        assert!(matches!(result, Err(RegressionError::SingularMatrix)));
    }

    #[test]
    fn test_inverse_badly_scaled_but_regular() {
        // Gram matrix of [1 | x] with x = 1e-6, 2e-6, 3e-6, 4e-6
        let mut a = Mat::zeros(2, 2);
        a[(0, 0)] = 4.0;
        a[(0, 1)] = 1e-5;
        a[(1, 0)] = 1e-5;
        a[(1, 1)] = 3e-11;

        let backend = FaerBackend;
        let inv = backend.inverse(&a, 1e-10).expect("matrix is invertible");
        let product = backend.matmul(&a, &inv).unwrap();

        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((product[(i, j)] - expected).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn test_inverse_singularity_ignores_units() {
        let a = Mat::from_fn(2, 2, |i, j| [[1.0, 2.0], [2.0, 4.0]][i][j]);
        let tiny = Mat::from_fn(2, 2, |i, j| a[(i, j)] * 1e-12);
        let huge = Mat::from_fn(2, 2, |i, j| a[(i, j)] * 1e12);

        for m in [&a, &tiny, &huge] {
            let result = FaerBackend.inverse(m, 1e-10);
            assert!(matches!(result, Err(RegressionError::SingularMatrix)));
        }
    }

    #[test]
    fn test_inverse_zero_matrix_is_singular() {
        let a = Mat::<f64>::zeros(2, 2);
        let result = FaerBackend.inverse(&a, 1e-10);
        assert!(matches!(result, Err(RegressionError::SingularMatrix)));
    }

    #[test]
    fn test_inverse_zero_diagonal_permutation() {
        let a = Mat::from_fn(2, 2, |i, j| if i == j { 0.0 } else { 1.0 });
        let inv = FaerBackend.inverse(&a, 1e-10).expect("permutation is invertible");

        for i in 0..2 {
            for j in 0..2 {
                assert!((inv[(i, j)] - a[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_inverse_not_square() {
        let a = Mat::<f64>::zeros(2, 3);
        let result = FaerBackend.inverse(&a, 1e-10);
        assert!(matches!(
            result,
            Err(RegressionError::NotSquare { nrows: 2, ncols: 3 })
        ));
    }

    #[test]
    fn test_standardize_zero_mean_unit_std() {
        let v = Col::from_fn(5, |i| (i as f64) * 3.0 + 1.0);
        let backend = FaerBackend;
        let z = backend.standardize(&v, 0.0).unwrap();

        assert!(backend.mean(&z).abs() < 1e-12);
        assert!((backend.std_dev(&z) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_standardize_constant_input() {
        let v = Col::from_fn(4, |_| 7.0);
        let result = FaerBackend.standardize(&v, 0.0);
        assert!(matches!(result, Err(RegressionError::ZeroVariance)));
    }

    #[test]
    fn test_standardize_constant_inexact_input() {
        // 0.1 has no exact binary form, so the computed std is a rounding residue
        let v = Col::from_fn(3, |_| 0.1);
        let result = FaerBackend.standardize(&v, 0.0);
        assert!(matches!(result, Err(RegressionError::ZeroVariance)));
    }

    #[test]
    fn test_correlate_perfect_negative() {
        let a = Col::from_fn(5, |i| i as f64);
        let b = Col::from_fn(5, |i| 10.0 - 2.0 * i as f64);
        let r = FaerBackend.correlate(&a, &b, 0.0).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }
}
