//! Ordinary Least Squares fitting.

use crate::core::{LeastSquaresOptions, LeastSquaresOptionsBuilder};
use crate::solvers::traits::{RegressionError, Regressor};
use crate::solvers::FittedLeastSquares;
use faer::{Col, Mat};

/// Ordinary Least Squares estimator.
///
/// The design matrix is used exactly as given: prepend a column of ones with
/// [`add_constant`](crate::utils::add_constant) to fit an intercept.
///
/// # Example
///
/// ```rust,ignore
/// use regression_diagnostics::solvers::{OlsRegressor, Regressor};
/// use regression_diagnostics::utils::add_constant;
/// use faer::{Mat, Col};
///
/// let x = Mat::from_fn(100, 2, |i, j| (i * (j + 1)) as f64);
/// let y = Col::from_fn(100, |i| 1.0 + 2.0 * i as f64);
///
/// let fitted = OlsRegressor::builder().build().fit(&add_constant(&x), &y)?;
/// let influence = fitted.influence();
/// ```
#[derive(Debug, Clone, Default)]
pub struct OlsRegressor {
    options: LeastSquaresOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    pub fn new(options: LeastSquaresOptions) -> Self {
        Self { options }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }
}

impl Regressor for OlsRegressor {
    fn fit(&self, x: &Mat<f64>, y: &Col<f64>) -> Result<FittedLeastSquares, RegressionError> {
        FittedLeastSquares::fit(x, y, None, &self.options)
    }
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: LeastSquaresOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
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

    /// Build the OLS regressor. Options are validated when fitting.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.builder.build_unchecked())
    }
}
