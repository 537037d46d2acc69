//! Conversions from caller data into design matrices and target vectors.
//!
//! Observations are rows and features are columns. One-dimensional feature
//! input is read as a single feature, so `vec![1.0, 2.0, 3.0]` becomes a
//! 3 x 1 design matrix. Targets supplied as matrices are flattened row by row.

use crate::solvers::RegressionError;
use faer::{Col, Mat};

/// Conversion into a rectangular design matrix (rows = observations).
pub trait IntoDesignMatrix {
    /// Build the design matrix, failing on ragged row input.
    fn into_design_matrix(self) -> Result<Mat<f64>, RegressionError>;
}

/// Conversion into a one-dimensional target vector.
pub trait IntoTarget {
    /// Build the target vector, flattening multi-dimensional input.
    fn into_target(self) -> Col<f64>;
}

impl IntoDesignMatrix for Mat<f64> {
    fn into_design_matrix(self) -> Result<Mat<f64>, RegressionError> {
        Ok(self)
    }
}

impl IntoDesignMatrix for &Mat<f64> {
    fn into_design_matrix(self) -> Result<Mat<f64>, RegressionError> {
        Ok(self.clone())
    }
}

impl IntoDesignMatrix for Col<f64> {
    fn into_design_matrix(self) -> Result<Mat<f64>, RegressionError> {
        Ok(Mat::from_fn(self.nrows(), 1, |i, _| self[i]))
    }
}

impl IntoDesignMatrix for &Col<f64> {
    fn into_design_matrix(self) -> Result<Mat<f64>, RegressionError> {
        Ok(Mat::from_fn(self.nrows(), 1, |i, _| self[i]))
    }
}

impl IntoDesignMatrix for &[f64] {
    fn into_design_matrix(self) -> Result<Mat<f64>, RegressionError> {
        Ok(Mat::from_fn(self.len(), 1, |i, _| self[i]))
    }
}

impl IntoDesignMatrix for Vec<f64> {
    fn into_design_matrix(self) -> Result<Mat<f64>, RegressionError> {
        self.as_slice().into_design_matrix()
    }
}

impl IntoDesignMatrix for &[Vec<f64>] {
    fn into_design_matrix(self) -> Result<Mat<f64>, RegressionError> {
        let n_features = self.first().map_or(0, Vec::len);

        if let Some((row, values)) = self
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != n_features)
        {
            return Err(RegressionError::RaggedRows {
                row,
                expected: n_features,
                got: values.len(),
            });
        }

        Ok(Mat::from_fn(self.len(), n_features, |i, j| self[i][j]))
    }
}

impl IntoDesignMatrix for Vec<Vec<f64>> {
    fn into_design_matrix(self) -> Result<Mat<f64>, RegressionError> {
        self.as_slice().into_design_matrix()
    }
}

impl IntoTarget for Col<f64> {
    fn into_target(self) -> Col<f64> {
        self
    }
}

impl IntoTarget for &Col<f64> {
    fn into_target(self) -> Col<f64> {
        self.clone()
    }
}

impl IntoTarget for &[f64] {
    fn into_target(self) -> Col<f64> {
        Col::from_fn(self.len(), |i| self[i])
    }
}

impl IntoTarget for Vec<f64> {
    fn into_target(self) -> Col<f64> {
        self.as_slice().into_target()
    }
}

impl IntoTarget for &Mat<f64> {
    fn into_target(self) -> Col<f64> {
        let n_cols = self.ncols();
        Col::from_fn(self.nrows() * n_cols, |k| self[(k / n_cols, k % n_cols)])
    }
}

impl IntoTarget for Mat<f64> {
    fn into_target(self) -> Col<f64> {
        (&self).into_target()
    }
}

impl IntoTarget for &[Vec<f64>] {
    fn into_target(self) -> Col<f64> {
        let flat: Vec<f64> = self.iter().flatten().copied().collect();
        flat.into_target()
    }
}

impl IntoTarget for Vec<Vec<f64>> {
    fn into_target(self) -> Col<f64> {
        self.as_slice().into_target()
    }
}

/// Prepend a column of ones to `x` so the intercept is solved as an
/// ordinary coefficient at index 0.
pub fn augment_with_intercept(x: &Mat<f64>) -> Mat<f64> {
    Mat::from_fn(x.nrows(), x.ncols() + 1, |i, j| {
        if j == 0 {
            1.0
        } else {
            x[(i, j - 1)]
        }
    })
}
