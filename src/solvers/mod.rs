//! Least squares estimators.

mod correlation;
mod normal_equations;
mod traits;

pub use correlation::CorrelationRegressor;
pub use normal_equations::NormalEquationsRegressor;
pub use traits::{LinearPredictor, RegressionError};
