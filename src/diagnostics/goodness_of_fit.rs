//! Residuals and the coefficient of determination.

use crate::solvers::RegressionError;
use faer::Col;

fn check_aligned(y: &Col<f64>, predictions: &Col<f64>) -> Result<(), RegressionError> {
    if y.nrows() != predictions.nrows() {
        return Err(RegressionError::LengthMismatch {
            left: y.nrows(),
            right: predictions.nrows(),
        });
    }
    Ok(())
}

/// Compute residuals: y_i - ŷ_i
pub fn residuals(y: &Col<f64>, predictions: &Col<f64>) -> Result<Col<f64>, RegressionError> {
    check_aligned(y, predictions)?;
    Ok(Col::from_fn(y.nrows(), |i| y[i] - predictions[i]))
}

/// Residual sum of squares: Σ(y_i - ŷ_i)²
pub fn residual_sum_of_squares(
    y: &Col<f64>,
    predictions: &Col<f64>,
) -> Result<f64, RegressionError> {
    check_aligned(y, predictions)?;
    Ok(y
        .iter()
        .zip(predictions.iter())
        .map(|(&yi, &pi)| (yi - pi).powi(2))
        .sum())
}

/// Total sum of squares around the mean: Σ(y_i - ȳ)²
pub fn total_sum_of_squares(y: &Col<f64>) -> f64 {
    let n = y.nrows();
    if n == 0 {
        return 0.0;
    }
    let y_mean: f64 = y.iter().sum::<f64>() / n as f64;
    y.iter().map(|&yi| (yi - y_mean).powi(2)).sum()
}

/// Coefficient of determination: 1 - SS_res / SS_tot
///
/// R² is undefined for a constant target; NaN is returned in that case
/// rather than dividing by zero. SS_tot counts as zero when it is within
/// rounding error of `Σy²`.
pub fn r_squared(y: &Col<f64>, predictions: &Col<f64>) -> Result<f64, RegressionError> {
    let rss = residual_sum_of_squares(y, predictions)?;
    let tss = total_sum_of_squares(y);

    let n = y.nrows() as f64;
    let sum_sq: f64 = y.iter().map(|&yi| yi * yi).sum();
    if tss <= (n * f64::EPSILON).powi(2) * sum_sq {
        return Ok(f64::NAN);
    }
    Ok(1.0 - rss / tss)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residuals() {
        let y = Col::from_fn(3, |i| [1.0, 2.0, 3.0][i]);
        let pred = Col::from_fn(3, |i| [1.5, 2.0, 2.0][i]);

        let res = residuals(&y, &pred).unwrap();
        assert!((res[0] + 0.5).abs() < 1e-12);
        assert!(res[1].abs() < 1e-12);
        assert!((res[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_perfect_fit() {
        let y = Col::from_fn(5, |i| 2.0 * i as f64);
        let r2 = r_squared(&y, &y.clone()).unwrap();
        assert!((r2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_mean_model_is_zero() {
        let y = Col::from_fn(4, |i| [1.0, 3.0, 5.0, 7.0][i]);
        let pred = Col::from_fn(4, |_| 4.0);
        let r2 = r_squared(&y, &pred).unwrap();
        assert!(r2.abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_constant_target_is_nan() {
        let y = Col::from_fn(4, |_| 3.0);
        let pred = Col::from_fn(4, |_| 3.0);
        assert!(r_squared(&y, &pred).unwrap().is_nan());
    }

    #[test]
    fn test_r_squared_constant_inexact_target_is_nan() {
        let y = Col::from_fn(3, |_| 0.1);
        let pred = Col::from_fn(3, |i| 0.1 + 0.01 * i as f64);
        assert!(r_squared(&y, &pred).unwrap().is_nan());
    }

    #[test]
    fn test_r_squared_small_scale_target_is_finite() {
        let y = Col::from_fn(4, |i| 1e-9 * (i + 1) as f64);
        let pred = Col::from_fn(4, |i| 1e-9 * (i + 1) as f64);
        assert!((r_squared(&y, &pred).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_misaligned_lengths() {
        let y = Col::from_fn(4, |i| i as f64);
        let pred = Col::from_fn(3, |i| i as f64);
        assert!(matches!(
            r_squared(&y, &pred),
            Err(RegressionError::LengthMismatch { left: 4, right: 3 })
        ));
    }
}
