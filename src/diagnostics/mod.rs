//! Goodness-of-fit diagnostics.
//!
//! - **Residuals**: observed minus predicted values
//! - **Sums of squares**: residual and total
//! - **R²**: fraction of target variance explained by the predictions
//!
//! # Example
//!
//! ```rust
//! use faer::Col;
//! use linreg::diagnostics::r_squared;
//!
//! let y = Col::from_fn(4, |i| [1.0, 2.0, 3.0, 4.0][i]);
//! let predictions = Col::from_fn(4, |i| [1.1, 1.9, 3.2, 3.8][i]);
//!
//! let r2 = r_squared(&y, &predictions)?;
//! assert!(r2 > 0.9);
//! # Ok::<(), linreg::solvers::RegressionError>(())
//! ```

mod goodness_of_fit;

pub use goodness_of_fit::{r_squared, residual_sum_of_squares, residuals, total_sum_of_squares};
