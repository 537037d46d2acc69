//! Core types for regression inputs and configuration.

mod input;
mod options;

pub use input::{augment_with_intercept, IntoDesignMatrix, IntoTarget};
pub use options::{EstimatorOptions, EstimatorOptionsBuilder, OptionsError};
