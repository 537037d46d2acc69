//! # Linear Regression: Correlation vs Normal Equations
//!
//! Two routes to the least squares line:
//!
//! - **Correlation-based**: one slope per feature from standardized
//!   correlation coefficients; exact only when features are uncorrelated.
//! - **Normal equations**: joint solution `(XᵗX)⁻¹Xᵗy` on a bias-augmented
//!   design matrix.
//!
//! Run with: `cargo run --example linear_regression`

use faer::{Col, Mat};
use linreg::prelude::*;

fn main() -> Result<(), RegressionError> {
    pretty_env_logger::init();

    println!("=== Linear Regression ===\n");

    perfect_line()?;
    noisy_line()?;
    correlated_features()?;
    error_cases();

    Ok(())
}

/// y = 2x, no noise: both estimators recover the line exactly.
fn perfect_line() -> Result<(), RegressionError> {
    println!("--- Perfect Line ---\n");

    let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
    let y = vec![2.0, 4.0, 6.0, 8.0];

    let correlation = CorrelationRegressor::new(x.clone(), y.clone())?;
    println!("Correlation slope: {:.4}", correlation.slope()?[0]);
    println!("Correlation intercept: {:.4}", correlation.intercept()?);
    println!("R-squared: {:.4}", correlation.r_squared()?);

    let mut normal = NormalEquationsRegressor::new(x, y)?;
    normal.fit()?;
    println!("Normal-equations slope: {:.4}", normal.coefficients()?[0]);
    println!("Normal-equations intercept: {:.4}", normal.intercept()?);
    println!(
        "Prediction at x = 5: {:.4}",
        normal.predict(vec![vec![5.0]])?[0]
    );
    println!();

    Ok(())
}

/// y = 1.5 + 0.8x + noise
fn noisy_line() -> Result<(), RegressionError> {
    println!("--- Noisy Line ---\n");

    let n = 40;
    let x = Mat::from_fn(n, 1, |i, _| i as f64 * 0.25);
    let y = Col::from_fn(n, |i| {
        let noise = (i as f64 * 1.3).sin() * 0.4;
        1.5 + 0.8 * (i as f64 * 0.25) + noise
    });

    let correlation = CorrelationRegressor::new(&x, &y)?;
    let mut normal = NormalEquationsRegressor::new(&x, &y)?;
    normal.fit()?;

    println!("True model: y = 1.5 + 0.8*x + noise");
    println!(
        "Correlation:      intercept {:.4}, slope {:.4}",
        correlation.intercept()?,
        correlation.slope()?[0]
    );
    println!(
        "Normal equations: intercept {:.4}, slope {:.4}",
        normal.intercept()?,
        normal.coefficients()?[0]
    );
    println!("R-squared: {:.4}", correlation.r_squared()?);
    println!();

    Ok(())
}

/// y = x1 + x2 with correlated x1, x2: per-feature slopes overshoot.
fn correlated_features() -> Result<(), RegressionError> {
    println!("--- Correlated Features ---\n");

    let x = vec![
        vec![1.0, 2.0],
        vec![2.0, 1.0],
        vec![3.0, 4.0],
        vec![4.0, 3.0],
        vec![5.0, 6.0],
    ];
    let y: Vec<f64> = x.iter().map(|row| row[0] + row[1]).collect();

    let correlation = CorrelationRegressor::new(x.clone(), y.clone())?;
    let mut normal = NormalEquationsRegressor::new(x, y)?;
    normal.fit()?;

    let a = correlation.slope()?;
    let b = normal.coefficients()?;
    println!("True model: y = x1 + x2");
    println!("Correlation slopes:      [{:.4}, {:.4}]", a[0], a[1]);
    println!("Normal-equations slopes: [{:.4}, {:.4}]", b[0], b[1]);
    println!("Correlation R-squared: {:.4}", correlation.r_squared()?);
    println!();

    Ok(())
}

fn error_cases() {
    println!("--- Error Cases ---\n");

    let a = Col::from_fn(3, |i| (i + 1) as f64);
    let b = Col::from_fn(2, |i| (i + 1) as f64);
    if let Err(e) = correlate(&a, &b) {
        println!("correlate([1,2,3], [1,2]): {}", e);
    }

    if let Ok(model) = NormalEquationsRegressor::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]) {
        if let Err(e) = model.coefficients() {
            println!("coefficients() before fit(): {}", e);
        }
    }

    if let Ok(mut model) = NormalEquationsRegressor::new(vec![1.0, 1.0, 1.0], vec![1.0, 2.0, 3.0])
    {
        if let Err(e) = model.fit() {
            println!("fit() on a constant feature: {}", e);
        }
    }
}
