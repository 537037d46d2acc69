//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::{Col, Mat};

/// Generate linear data: y = intercept + x * beta + noise, with beta_j = j + 1.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut x = Mat::zeros(n_samples, n_features);
    let mut y = Col::zeros(n_samples);
    let true_coefficients = Col::from_fn(n_features, |j| (j + 1) as f64);

    for i in 0..n_samples {
        let mut yi = intercept;
        for j in 0..n_features {
            x[(i, j)] = next_rand(&mut rng_state);
            yi += x[(i, j)] * true_coefficients[j];
        }
        yi += noise_std * next_rand(&mut rng_state);
        y[i] = yi;
    }

    (x, y, true_coefficients)
}

/// Two centred, mutually orthogonal +/-1 features (a 2x2 factorial design
/// repeated `reps` times) and a noisy target.
pub fn generate_orthogonal_data(reps: usize) -> (Mat<f64>, Col<f64>) {
    let levels = [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)];
    let noise = [0.3, -0.1, 0.25, -0.4, 0.05, 0.15, -0.2, 0.1];
    let n = reps * levels.len();

    let x = Mat::from_fn(n, 2, |i, j| {
        let (a, b) = levels[i % levels.len()];
        if j == 0 {
            a
        } else {
            b
        }
    });
    let y = Col::from_fn(n, |i| {
        3.0 + 2.0 * x[(i, 0)] - 0.5 * x[(i, 1)] + noise[i % noise.len()]
    });

    (x, y)
}

/// Two positively correlated features with y = x1 + x2 exactly.
pub fn generate_correlated_data() -> (Mat<f64>, Col<f64>) {
    let x1 = [1.0, 2.0, 3.0, 4.0, 5.0];
    let x2 = [2.0, 1.0, 4.0, 3.0, 6.0];

    let x = Mat::from_fn(5, 2, |i, j| if j == 0 { x1[i] } else { x2[i] });
    let y = Col::from_fn(5, |i| x1[i] + x2[i]);

    (x, y)
}

/// Features `[[1], [2], [3], [4]]` with target `y = 2x`.
pub fn perfect_line() -> (Vec<Vec<f64>>, Vec<f64>) {
    (
        vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]],
        vec![2.0, 4.0, 6.0, 8.0],
    )
}

/// Install a logger once per test binary.
pub fn init_logger() {
    let _ = pretty_env_logger::try_init();
}
