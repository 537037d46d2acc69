//! Correlation-based least squares estimator.

use crate::core::{EstimatorOptions, IntoDesignMatrix, IntoTarget};
use crate::diagnostics;
use crate::linalg::{FaerBackend, LinearAlgebra};
use crate::solvers::traits::{LinearPredictor, RegressionError};
use faer::{Col, Mat};
use std::cell::OnceCell;

/// Least squares estimator built from standardized correlation coefficients.
///
/// Each feature gets its own simple-regression slope,
/// `r(x_j, y) * sd(y) / sd(x_j)`, and the intercept is
/// `mean(y) - slope · mean(x)`. The slopes ignore correlation *between*
/// features, so they agree with multivariate OLS only when the features are
/// mutually uncorrelated. Use
/// [`NormalEquationsRegressor`](crate::solvers::NormalEquationsRegressor)
/// for a joint solution.
///
/// Nothing is fitted up front: every call to [`slope`](Self::slope),
/// [`intercept`](Self::intercept) or [`predict`](Self::predict) works from
/// the stored training data. Enable [`EstimatorOptions::memoize`] to compute
/// the slopes only once.
///
/// # Example
///
/// ```rust
/// use linreg::solvers::CorrelationRegressor;
///
/// let model = CorrelationRegressor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2.0, 4.0, 6.0, 8.0])?;
///
/// assert!((model.slope()?[0] - 2.0).abs() < 1e-10);
/// assert!(model.intercept()?.abs() < 1e-10);
/// assert!((model.predict(vec![vec![5.0]])?[0] - 10.0).abs() < 1e-10);
/// # Ok::<(), linreg::solvers::RegressionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CorrelationRegressor<B = FaerBackend> {
    x: Mat<f64>,
    y: Col<f64>,
    options: EstimatorOptions,
    backend: B,
    slope_cache: OnceCell<Col<f64>>,
}

impl CorrelationRegressor<FaerBackend> {
    /// Create an estimator over the given training data with default options.
    ///
    /// One-dimensional feature input is treated as a single feature.
    pub fn new(x: impl IntoDesignMatrix, y: impl IntoTarget) -> Result<Self, RegressionError> {
        Self::with_options(x, y, EstimatorOptions::default())
    }

    /// Create an estimator with the given options.
    pub fn with_options(
        x: impl IntoDesignMatrix,
        y: impl IntoTarget,
        options: EstimatorOptions,
    ) -> Result<Self, RegressionError> {
        Self::with_backend(x, y, options, FaerBackend)
    }
}

impl<B: LinearAlgebra> CorrelationRegressor<B> {
    /// Create an estimator that performs its arithmetic through `backend`.
    ///
    /// Fails if the options are invalid, if there are no observations, or if
    /// the number of observations in `x` and `y` differ.
    pub fn with_backend(
        x: impl IntoDesignMatrix,
        y: impl IntoTarget,
        options: EstimatorOptions,
        backend: B,
    ) -> Result<Self, RegressionError> {
        options.validate()?;

        let x = x.into_design_matrix()?;
        let y = y.into_target();

        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }
        if x.nrows() == 0 {
            return Err(RegressionError::EmptyInput);
        }

        debug!(
            "correlation regressor over {} observations, {} features",
            x.nrows(),
            x.ncols()
        );

        Ok(Self {
            x,
            y,
            options,
            backend,
            slope_cache: OnceCell::new(),
        })
    }

    /// Training design matrix.
    pub fn design_matrix(&self) -> &Mat<f64> {
        &self.x
    }

    /// Training target vector.
    pub fn target(&self) -> &Col<f64> {
        &self.y
    }

    /// Options this estimator was built with.
    pub fn options(&self) -> &EstimatorOptions {
        &self.options
    }

    /// Backend performing the arithmetic.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Z-scores of `values`.
    pub fn standardize(&self, values: &Col<f64>) -> Result<Col<f64>, RegressionError> {
        self.backend
            .standardize(values, self.options.variance_tolerance)
    }

    /// Correlation of `a` and `b` as the mean product of their z-scores.
    pub fn correlate(&self, a: &Col<f64>, b: &Col<f64>) -> Result<f64, RegressionError> {
        self.backend
            .correlate(a, b, self.options.variance_tolerance)
    }

    /// Per-feature slopes, one entry per feature column.
    ///
    /// Fails with [`RegressionError::ZeroVariance`] if the target or any
    /// feature column is constant.
    pub fn slope(&self) -> Result<Col<f64>, RegressionError> {
        if !self.options.memoize {
            return self.compute_slopes();
        }
        if let Some(cached) = self.slope_cache.get() {
            debug!("using memoized slopes");
            return Ok(cached.clone());
        }

        let slopes = self.compute_slopes()?;
        Ok(self.slope_cache.get_or_init(|| slopes).clone())
    }

    /// Intercept: `mean(y) - slope · mean(x)`.
    pub fn intercept(&self) -> Result<f64, RegressionError> {
        let slopes = self.slope()?;
        self.intercept_for(&slopes)
    }

    /// Predict targets for new observations.
    ///
    /// Fails with [`RegressionError::FeatureMismatch`] if `x` has a different
    /// number of features than the training data.
    pub fn predict(&self, x: impl IntoDesignMatrix) -> Result<Col<f64>, RegressionError> {
        let x = x.into_design_matrix()?;
        self.predict_matrix(&x)
    }

    /// Coefficient of determination of the model on its own training data.
    pub fn r_squared(&self) -> Result<f64, RegressionError> {
        let predictions = self.predict_matrix(&self.x)?;
        diagnostics::r_squared(&self.y, &predictions)
    }

    fn compute_slopes(&self) -> Result<Col<f64>, RegressionError> {
        let n_features = self.x.ncols();
        let std_y = self.backend.std_dev(&self.y);

        let mut slopes = Col::zeros(n_features);
        for j in 0..n_features {
            let column = self.backend.column(&self.x, j);
            let r = self.correlate(&column, &self.y)?;
            slopes[j] = r * std_y / self.backend.std_dev(&column);
        }

        trace!("slopes: {:?}", slopes);
        Ok(slopes)
    }

    fn intercept_for(&self, slopes: &Col<f64>) -> Result<f64, RegressionError> {
        let x_means = self.backend.column_means(&self.x);
        Ok(self.backend.mean(&self.y) - self.backend.dot(slopes, &x_means)?)
    }

    fn predict_matrix(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        if x.ncols() != self.x.ncols() {
            return Err(RegressionError::FeatureMismatch {
                expected: self.x.ncols(),
                got: x.ncols(),
            });
        }

        let slopes = self.slope()?;
        let intercept = self.intercept_for(&slopes)?;
        let linear = self.backend.mat_vec(x, &slopes)?;

        Ok(Col::from_fn(linear.nrows(), |i| linear[i] + intercept))
    }
}

impl<B: LinearAlgebra> LinearPredictor for CorrelationRegressor<B> {
    fn n_features(&self) -> usize {
        self.x.ncols()
    }

    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        self.predict_matrix(x)
    }
}
