//! Normal-equations least squares estimator.

use crate::core::{augment_with_intercept, EstimatorOptions, IntoDesignMatrix, IntoTarget};
use crate::linalg::{FaerBackend, LinearAlgebra};
use crate::solvers::traits::{LinearPredictor, RegressionError};
use faer::{Col, Mat};

/// Ordinary least squares solved through the normal equations.
///
/// The design matrix is augmented with a leading column of ones, and
/// `β = (XᵗX)⁻¹Xᵗy` is solved jointly for the intercept (`β[0]`) and the
/// slopes (`β[1..]`). The inverse is formed explicitly; a singular `XᵗX`
/// (for example, perfectly collinear or constant features) fails the fit
/// with [`RegressionError::SingularMatrix`].
///
/// Coefficients start out unset and are computed once by [`fit`](Self::fit).
///
/// # Example
///
/// ```rust
/// use linreg::solvers::NormalEquationsRegressor;
///
/// let mut model =
///     NormalEquationsRegressor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2.0, 4.0, 6.0, 8.0])?;
/// model.fit()?;
///
/// assert!((model.coefficients()?[0] - 2.0).abs() < 1e-10);
/// assert!(model.intercept()?.abs() < 1e-10);
/// assert!((model.predict(vec![5.0])?[0] - 10.0).abs() < 1e-10);
/// # Ok::<(), linreg::solvers::RegressionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct NormalEquationsRegressor<B = FaerBackend> {
    /// Bias-augmented design matrix `[1 | X]`.
    design: Mat<f64>,
    y: Col<f64>,
    options: EstimatorOptions,
    backend: B,
    coefficients: Option<Col<f64>>,
}

impl NormalEquationsRegressor<FaerBackend> {
    /// Create an unfitted estimator over the given training data.
    ///
    /// One-dimensional feature input is treated as a single feature and a
    /// multi-dimensional target is flattened.
    pub fn new(x: impl IntoDesignMatrix, y: impl IntoTarget) -> Result<Self, RegressionError> {
        Self::with_options(x, y, EstimatorOptions::default())
    }

    /// Create an unfitted estimator with the given options.
    pub fn with_options(
        x: impl IntoDesignMatrix,
        y: impl IntoTarget,
        options: EstimatorOptions,
    ) -> Result<Self, RegressionError> {
        Self::with_backend(x, y, options, FaerBackend)
    }
}

impl<B: LinearAlgebra> NormalEquationsRegressor<B> {
    /// Create an unfitted estimator that performs its arithmetic through
    /// `backend`.
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
            "normal-equations regressor over {} observations, {} features",
            x.nrows(),
            x.ncols()
        );

        Ok(Self {
            design: augment_with_intercept(&x),
            y,
            options,
            backend,
            coefficients: None,
        })
    }

    /// Solve the normal equations and cache the coefficient vector.
    ///
    /// The coefficients are computed on the first call only; later calls
    /// return the cached vector unchanged.
    pub fn fit(&mut self) -> Result<&Col<f64>, RegressionError> {
        if self.coefficients.is_some() {
            debug!("already fitted, reusing coefficients");
        } else {
            let beta = self.solve()?;
            debug!("fitted {} coefficients", beta.nrows());
            self.coefficients = Some(beta);
        }
        self.coefficient_vector()
    }

    /// Whether [`fit`](Self::fit) has completed.
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Full coefficient vector, intercept first.
    pub fn coefficient_vector(&self) -> Result<&Col<f64>, RegressionError> {
        self.coefficients.as_ref().ok_or(RegressionError::NotFitted)
    }

    /// Slope coefficients, one per feature.
    pub fn coefficients(&self) -> Result<Col<f64>, RegressionError> {
        let beta = self.coefficient_vector()?;
        Ok(Col::from_fn(beta.nrows() - 1, |i| beta[i + 1]))
    }

    /// Intercept term.
    pub fn intercept(&self) -> Result<f64, RegressionError> {
        Ok(self.coefficient_vector()?[0])
    }

    /// Predict targets for new observations.
    ///
    /// One-dimensional input is treated as a single feature.
    pub fn predict(&self, x: impl IntoDesignMatrix) -> Result<Col<f64>, RegressionError> {
        let x = x.into_design_matrix()?;
        self.predict_matrix(&x)
    }

    /// Options this estimator was built with.
    pub fn options(&self) -> &EstimatorOptions {
        &self.options
    }

    /// Backend performing the arithmetic.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Training target vector.
    pub fn target(&self) -> &Col<f64> {
        &self.y
    }

    /// Bias-augmented training design matrix, ones in column 0.
    pub fn augmented_design(&self) -> &Mat<f64> {
        &self.design
    }

    fn solve(&self) -> Result<Col<f64>, RegressionError> {
        let xt = self.backend.transpose(&self.design);
        let xtx = self.backend.matmul(&xt, &self.design)?;
        let xtx_inv = self
            .backend
            .inverse(&xtx, self.options.singular_tolerance)?;
        let xty = self.backend.mat_vec(&xt, &self.y)?;

        trace!("(X'X)^-1: {:?}", xtx_inv);
        self.backend.mat_vec(&xtx_inv, &xty)
    }

    fn predict_matrix(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        let x_aug = augment_with_intercept(x);
        let beta = self.coefficient_vector()?;

        if x_aug.ncols() != beta.nrows() {
            return Err(RegressionError::FeatureMismatch {
                expected: beta.nrows() - 1,
                got: x.ncols(),
            });
        }

        self.backend.mat_vec(&x_aug, beta)
    }
}

impl<B: LinearAlgebra> LinearPredictor for NormalEquationsRegressor<B> {
    fn n_features(&self) -> usize {
        self.design.ncols() - 1
    }

    fn predict(&self, x: &Mat<f64>) -> Result<Col<f64>, RegressionError> {
        self.predict_matrix(x)
    }
}
