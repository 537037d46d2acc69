//! Ordinary least squares linear regression.
//!
//! Two independent estimators are provided:
//!
//! - [`CorrelationRegressor`](solvers::CorrelationRegressor) derives one
//!   slope per feature from standardized correlation coefficients and the
//!   intercept from the means. It keeps no fitted state.
//! - [`NormalEquationsRegressor`](solvers::NormalEquationsRegressor) solves
//!   `(XᵗX)⁻¹Xᵗy` on a bias-augmented design matrix, fitting the intercept
//!   and slopes jointly.
//!
//! Both are generic over a [`LinearAlgebra`](linalg::LinearAlgebra) backend,
//! defaulting to [`FaerBackend`](linalg::FaerBackend).
//!
//! # Example
//!
//! ```rust
//! use linreg::prelude::*;
//!
//! let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
//! let y = vec![2.0, 4.0, 6.0, 8.0];
//!
//! let correlation = CorrelationRegressor::new(x.clone(), y.clone())?;
//! println!("slope = {:?}", correlation.slope()?);
//! println!("R² = {}", correlation.r_squared()?);
//!
//! let mut normal = NormalEquationsRegressor::new(x, y)?;
//! normal.fit()?;
//! println!("intercept = {}", normal.intercept()?);
//! println!("prediction = {:?}", normal.predict(vec![vec![5.0]])?);
//! # Ok::<(), RegressionError>(())
//! ```

#[macro_use]
extern crate log;

pub mod core;
pub mod diagnostics;
pub mod linalg;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{EstimatorOptions, IntoDesignMatrix, IntoTarget, OptionsError};
    pub use crate::diagnostics::{r_squared, residuals};
    pub use crate::linalg::{correlate, standardize, FaerBackend, LinearAlgebra};
    pub use crate::solvers::{
        CorrelationRegressor, LinearPredictor, NormalEquationsRegressor, RegressionError,
    };
}

pub use crate::core::{EstimatorOptions, OptionsError};
pub use crate::solvers::{
    CorrelationRegressor, LinearPredictor, NormalEquationsRegressor, RegressionError,
};
