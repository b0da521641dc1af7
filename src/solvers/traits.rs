//! Core traits for least-squares estimators.

use crate::solvers::FittedLeastSquares;
use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur during least-squares fitting.
#[derive(Debug, Error)]
pub enum RegressionError {
    #[error("dimension mismatch: X has {x_rows} rows but y has {y_len} elements")]
    DimensionMismatch { x_rows: usize, y_len: usize },

    #[error("weights length mismatch: X has {x_rows} rows but weights has {weights_len} elements")]
    WeightsLengthMismatch { x_rows: usize, weights_len: usize },

    #[error("insufficient observations: need at least {needed}, got {got}")]
    InsufficientObservations { needed: usize, got: usize },

    #[error("all columns of the design matrix are zero or non-finite")]
    AllColumnsAliased,

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] crate::core::OptionsError),

    #[error("invalid weights: all weights must be non-negative and not all zero")]
    InvalidWeights,
}

/// A least-squares estimator that can be fit to data.
///
/// Every estimator produces the same fitted type, so diagnostics downstream
/// accept any of them.
pub trait Regressor {
    /// Fit the model to the data.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n_samples, n_features), used as given
    /// * `y` - Target vector of length n_samples
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<FittedLeastSquares, RegressionError>;
}
