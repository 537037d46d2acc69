//! Estimator options and configuration.

use thiserror::Error;

/// Configuration options shared by the estimators.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorOptions {
    /// Relative threshold below which a matrix is treated as singular during
    /// inversion (default: 1e-10). A pivot counts as zero when it is at most
    /// this fraction of the largest pivot, after scaling the matrix to a unit
    /// diagonal, so the outcome does not depend on the units of the data.
    pub singular_tolerance: f64,
    /// Standard deviations at or below this value make standardization fail
    /// (default: 0.0, i.e. only constant inputs are rejected, including those
    /// whose computed spread is pure rounding error).
    pub variance_tolerance: f64,
    /// Cache the per-feature slopes of the correlation-based estimator after
    /// their first computation (default: false).
    pub memoize: bool,
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            singular_tolerance: 1e-10,
            variance_tolerance: 0.0,
            memoize: false,
        }
    }
}

/// Errors that can occur when validating estimator options.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("singular_tolerance must be finite and non-negative, got {0}")]
    InvalidSingularTolerance(f64),
    #[error("variance_tolerance must be finite and non-negative, got {0}")]
    InvalidVarianceTolerance(f64),
}

impl EstimatorOptions {
    /// Create a new builder for estimator options.
    pub fn builder() -> EstimatorOptionsBuilder {
        EstimatorOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.singular_tolerance.is_finite() || self.singular_tolerance < 0.0 {
            return Err(OptionsError::InvalidSingularTolerance(
                self.singular_tolerance,
            ));
        }
        if !self.variance_tolerance.is_finite() || self.variance_tolerance < 0.0 {
            return Err(OptionsError::InvalidVarianceTolerance(
                self.variance_tolerance,
            ));
        }
        Ok(())
    }
}

/// Builder for `EstimatorOptions`.
#[derive(Debug, Clone, Default)]
pub struct EstimatorOptionsBuilder {
    options: EstimatorOptions,
}

impl EstimatorOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the singularity threshold used by matrix inversion.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.options.singular_tolerance = tol;
        self
    }

    /// Set the variance threshold used by standardization.
    pub fn variance_tolerance(mut self, tol: f64) -> Self {
        self.options.variance_tolerance = tol;
        self
    }

    /// Enable or disable slope memoization.
    pub fn memoize(mut self, memoize: bool) -> Self {
        self.options.memoize = memoize;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<EstimatorOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> EstimatorOptions {
        self.options
    }
}
