//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::{Col, Mat};

/// Column from a slice.
pub fn col(values: &[f64]) -> Col<f64> {
    Col::from_fn(values.len(), |i| values[i])
}

/// Matrix from row slices.
pub fn mat(rows: &[&[f64]]) -> Mat<f64> {
    let ncols = rows.first().map_or(0, |r| r.len());
    Mat::from_fn(rows.len(), ncols, |i, j| rows[i][j])
}

/// Single-column design matrix.
pub fn column_design(values: &[f64]) -> Mat<f64> {
    Mat::from_fn(values.len(), 1, |i, _| values[i])
}

/// Generate simple linear data: y = intercept + x * beta + noise.
///
/// Returns the design without an intercept column, the response and the
/// true coefficients `1, 2, ..., n_features`.
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Mat<f64>, Col<f64>, Col<f64>) {
    // deterministic LCG for reproducibility
    let mut rng_state = seed;
    let next_rand = |state: &mut u64| -> f64 {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let true_coefficients = Col::from_fn(n_features, |j| (j + 1) as f64);
    let mut x = Mat::zeros(n_samples, n_features);
    let mut y = Col::zeros(n_samples);

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

/// Assert two columns agree to `decimals` decimal places.
pub fn assert_rounded_eq(actual: &Col<f64>, expected: &[f64], decimals: i32) {
    assert_eq!(actual.nrows(), expected.len(), "length mismatch");
    let factor = 10f64.powi(decimals);
    for (i, &e) in expected.iter().enumerate() {
        let a = (actual[i] * factor).round() / factor;
        let e = (e * factor).round() / factor;
        assert_eq!(a, e, "entry {} differs: {} vs {}", i, actual[i], e);
    }
}
