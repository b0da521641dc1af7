//! The fitted model shared by every least-squares estimator.

use crate::core::LeastSquaresOptions;
use crate::diagnostics::leverage::leverage_from_basis;
use crate::diagnostics::{
    cooks_distance, cooks_p_values, externally_studentized_residuals, studentized_residuals,
};
use crate::solvers::traits::RegressionError;
use crate::utils::{back_substitute, detect_aliased_columns, select_columns};
use faer::{Col, Mat};
use log::{debug, warn};

/// A fitted least-squares model.
///
/// Produced by [`OlsRegressor`](crate::solvers::OlsRegressor) and
/// [`WlsRegressor`](crate::solvers::WlsRegressor). Weighted fits keep their
/// residuals on the original scale; influence measures use the whitened
/// (weight-scaled) residuals and design.
#[derive(Debug, Clone)]
pub struct FittedLeastSquares {
    options: LeastSquaresOptions,
    coefficients: Col<f64>,
    aliased: Vec<bool>,
    rank: usize,
    fitted_values: Col<f64>,
    residuals: Col<f64>,
    whitened_residuals: Col<f64>,
    hat_matrix_diag: Col<f64>,
    weights: Option<Col<f64>>,
    ssr: f64,
    scale: f64,
}

/// Influence diagnostics of a fitted model.
#[derive(Debug, Clone)]
pub struct Influence {
    /// Diagonal of the hat matrix (leverage).
    pub hat_matrix_diag: Col<f64>,
    /// Residuals scaled by `sqrt(scale * (1 - h_ii))`.
    pub resid_studentized_internal: Col<f64>,
    /// Residuals scaled by the leave-one-out standard error.
    pub resid_studentized_external: Col<f64>,
    /// Cook's distance and the matching F-distribution p-values.
    pub cooks_distance: (Col<f64>, Col<f64>),
}

impl FittedLeastSquares {
    /// Fit by least squares on `sqrt(w) * X` and `sqrt(w) * y`.
    ///
    /// With no weights this is ordinary least squares. Columns that are
    /// linear combinations of earlier ones are aliased and get NaN
    /// coefficients.
    pub(crate) fn fit(
        x: &Mat<f64>,
        y: &Col<f64>,
        weights: Option<&Col<f64>>,
        options: &LeastSquaresOptions,
    ) -> Result<Self, RegressionError> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if x.nrows() != y.nrows() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.nrows(),
            });
        }

        if n_samples < 2 {
            return Err(RegressionError::InsufficientObservations {
                needed: 2,
                got: n_samples,
            });
        }

        options.validate()?;

        let sqrt_weights = match weights {
            Some(w) => Col::from_fn(n_samples, |i| w[i].sqrt()),
            None => Col::from_fn(n_samples, |_| 1.0),
        };

        let x_white = Mat::from_fn(n_samples, n_features, |i, j| x[(i, j)] * sqrt_weights[i]);
        let y_white = Col::from_fn(n_samples, |i| y[i] * sqrt_weights[i]);

        let aliased = detect_aliased_columns(&x_white, options.rank_tolerance);
        let rank = aliased.iter().filter(|&&a| !a).count();

        if rank == 0 {
            return Err(RegressionError::AllColumnsAliased);
        }
        if rank < n_features {
            warn!(
                "design matrix is rank deficient: rank {} of {} columns, aliased coefficients set to NaN",
                rank, n_features
            );
        }

        let design = select_columns(&x_white, &aliased);
        let qr = design.qr();
        let q = qr.compute_Q();
        let r = qr.R().to_owned();

        let qty = q.transpose() * &y_white;
        let beta_reduced = back_substitute(&r, &qty, rank);

        let mut coefficients = Col::zeros(n_features);
        let mut k = 0;
        for j in 0..n_features {
            if aliased[j] {
                coefficients[j] = f64::NAN;
            } else {
                coefficients[j] = beta_reduced[k];
                k += 1;
            }
        }

        let hat_matrix_diag = leverage_from_basis(&q, rank);

        let fitted_values = linear_predictor(x, &coefficients, &aliased);
        let residuals = Col::from_fn(n_samples, |i| y[i] - fitted_values[i]);
        let whitened_residuals = Col::from_fn(n_samples, |i| residuals[i] * sqrt_weights[i]);

        let ssr: f64 = whitened_residuals.iter().map(|&e| e * e).sum();
        let df_resid = n_samples - rank;
        let scale = if df_resid > 0 {
            ssr / df_resid as f64
        } else {
            f64::NAN
        };

        debug!(
            "fitted least squares: n = {}, rank = {}, ssr = {}",
            n_samples, rank, ssr
        );

        Ok(Self {
            options: options.clone(),
            coefficients,
            aliased,
            rank,
            fitted_values,
            residuals,
            whitened_residuals,
            hat_matrix_diag,
            weights: weights.cloned(),
            ssr,
            scale,
        })
    }

    /// Estimated coefficients; aliased columns are NaN.
    pub fn coefficients(&self) -> &Col<f64> {
        &self.coefficients
    }

    /// Which design columns were aliased.
    pub fn aliased(&self) -> &[bool] {
        &self.aliased
    }

    /// Numerical rank of the (whitened) design matrix.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of observations used in the fit.
    pub fn n_observations(&self) -> usize {
        self.residuals.nrows()
    }

    /// Residual degrees of freedom (n - rank).
    pub fn df_resid(&self) -> usize {
        self.n_observations() - self.rank
    }

    /// Fitted values on the training data.
    pub fn fitted_values(&self) -> &Col<f64> {
        &self.fitted_values
    }

    /// Residuals `y - fitted_values`.
    pub fn residuals(&self) -> &Col<f64> {
        &self.residuals
    }

    /// Residuals multiplied by the square root of the weights.
    pub fn whitened_residuals(&self) -> &Col<f64> {
        &self.whitened_residuals
    }

    /// Observation weights, if the model was fit by weighted least squares.
    pub fn weights(&self) -> Option<&Col<f64>> {
        self.weights.as_ref()
    }

    /// Sum of squared whitened residuals.
    pub fn ssr(&self) -> f64 {
        self.ssr
    }

    /// Residual variance estimate `ssr / df_resid` (NaN for an exact fit).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Options used to fit this model.
    pub fn options(&self) -> &LeastSquaresOptions {
        &self.options
    }

    /// Predict responses for a new design matrix with the same columns.
    pub fn predict(&self, x: &Mat<f64>) -> Col<f64> {
        linear_predictor(x, &self.coefficients, &self.aliased)
    }

    /// Number of design columns, aliased ones included.
    pub fn n_parameters(&self) -> usize {
        self.coefficients.nrows()
    }

    /// Compute influence diagnostics.
    ///
    /// Cook's distance divides by the number of design columns and its
    /// p-values use `F(n_parameters, df_resid)`; on rank-deficient designs
    /// this differs from the rank.
    pub fn influence(&self) -> Influence {
        let hat_matrix_diag = self.hat_matrix_diag.clone();
        let resid_studentized_internal =
            studentized_residuals(&self.whitened_residuals, &hat_matrix_diag, self.scale);
        let resid_studentized_external = externally_studentized_residuals(
            &self.whitened_residuals,
            &hat_matrix_diag,
            self.scale,
            self.rank,
        );
        let n_params = self.n_parameters();
        let distances =
            cooks_distance(&self.whitened_residuals, &hat_matrix_diag, self.scale, n_params);
        let p_values = cooks_p_values(&distances, n_params, self.df_resid());

        Influence {
            hat_matrix_diag,
            resid_studentized_internal,
            resid_studentized_external,
            cooks_distance: (distances, p_values),
        }
    }
}

fn linear_predictor(x: &Mat<f64>, coefficients: &Col<f64>, aliased: &[bool]) -> Col<f64> {
    Col::from_fn(x.nrows(), |i| {
        (0..x.ncols())
            .filter(|&j| !aliased[j])
            .map(|j| x[(i, j)] * coefficients[j])
            .sum::<f64>()
    })
}
