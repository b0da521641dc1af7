//! Weighted Least Squares fitting.

use crate::core::{LeastSquaresOptions, LeastSquaresOptionsBuilder};
use crate::solvers::traits::{RegressionError, Regressor};
use crate::solvers::FittedLeastSquares;
use faer::{Col, Mat};

/// Weighted Least Squares estimator.
///
/// Minimizes: Σ w_i (y_i - x_i'β)²
///
/// This is equivalent to transforming the problem:
/// X → W^(1/2)X, y → W^(1/2)y, then applying OLS.
///
/// When no weights are set, every observation gets weight one.
#[derive(Debug, Clone, Default)]
pub struct WlsRegressor {
    options: LeastSquaresOptions,
    weights: Option<Col<f64>>,
}

impl WlsRegressor {
    /// Create a new WLS regressor with the given options.
    pub fn new(options: LeastSquaresOptions) -> Self {
        Self {
            options,
            weights: None,
        }
    }

    /// Set the observation weights.
    pub fn with_weights(mut self, weights: Col<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> WlsRegressorBuilder {
        WlsRegressorBuilder::default()
    }
}

impl Regressor for WlsRegressor {
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<FittedLeastSquares, RegressionError> {
        let n_samples = x.nrows();

        let weights = match &self.weights {
            Some(w) => {
                if w.nrows() != n_samples {
                    return Err(RegressionError::WeightsLengthMismatch {
                        x_rows: n_samples,
                        weights_len: w.nrows(),
                    });
                }
                if w.iter().any(|&wi| wi < 0.0 || !wi.is_finite()) {
                    return Err(RegressionError::InvalidWeights);
                }
                w.clone()
            }
            None => Col::from_fn(n_samples, |_| 1.0),
        };

        let weight_sum: f64 = weights.iter().sum();
        if weight_sum < 1e-14 {
            return Err(RegressionError::InvalidWeights);
        }

        FittedLeastSquares::fit(x, y, Some(&weights), &self.options)
    }
}

/// Builder for `WlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct WlsRegressorBuilder {
    builder: LeastSquaresOptionsBuilder,
    weights: Option<Col<f64>>,
}

impl WlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the observation weights.
    pub fn weights(mut self, weights: Col<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Set the rank tolerance used to detect aliased columns.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.rank_tolerance(tol);
        self
    }

    /// Set the significance level used to flag large residuals.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.builder = self.builder.alpha(alpha);
        self
    }

    /// Build the WLS regressor. Options are validated when fitting.
    pub fn build(self) -> WlsRegressor {
        WlsRegressor {
            options: self.builder.build_unchecked(),
            weights: self.weights,
        }
    }
}
