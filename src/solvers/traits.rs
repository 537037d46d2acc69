//! Core traits for regression estimators.

use crate::core::OptionsError;
use crate::diagnostics;
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur while building, fitting or querying an estimator.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("length mismatch: sequences have {left} and {right} elements")]
    LengthMismatch { left: usize, right: usize },

    #[error("feature mismatch: model was trained on {expected} features, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("ragged input: row {row} has {got} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("inner dimensions disagree: left operand has {left_cols} columns, right has {right_rows} rows")]
    InnerDimensionMismatch { left_cols: usize, right_rows: usize },

    #[error("matrix is not square: {nrows}x{ncols}")]
    NotSquare { nrows: usize, ncols: usize },

    #[error("model has not been fitted yet")]
    NotFitted,

    #[error("matrix is singular or nearly singular")]
    SingularMatrix,

    #[error("input has zero variance")]
    ZeroVariance,

    #[error("input contains no observations")]
    EmptyInput,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),
}

impl RegressionError {
    /// Whether this error reports misaligned shapes or lengths.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            RegressionError::DimensionMismatch { .. }
                | RegressionError::LengthMismatch { .. }
                | RegressionError::FeatureMismatch { .. }
                | RegressionError::RaggedRows { .. }
                | RegressionError::InnerDimensionMismatch { .. }
                | RegressionError::NotSquare { .. }
        )
    }

    /// Whether this error comes from degenerate numeric input
    /// (constant data or a singular system).
    pub fn is_numeric_degeneracy(&self) -> bool {
        matches!(
            self,
            RegressionError::ZeroVariance | RegressionError::SingularMatrix
        )
    }
}

/// A linear model that can make predictions from a design matrix.
pub trait LinearPredictor {
    /// Number of features the model was trained on.
    fn n_features(&self) -> usize;

    /// Make predictions on new data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features)
    ///
    /// # Returns
    /// Predicted values vector of length n_samples.
    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError>;

    /// Calculate the score (R²) on new data.
    ///
    /// Returns NaN when `y` is constant, since the total sum of squares is zero.
    ///
    /// # Arguments
    /// * `x` - Design matrix
    /// * `y` - True target values
    fn score(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<f64, RegressionError> {
        let predictions = self.predict(x)?;
        diagnostics::r_squared(y, &predictions)
    }
}
