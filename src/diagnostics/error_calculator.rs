//! Residual-based error statistics for a pair of observed and predicted values.

use std::fmt;
use std::io::{self, Write};

use crate::core::{ArrayInput, InvalidTypeError};
use crate::validation::check_for_array_validity;
use faer::Col;
use log::{debug, trace, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Degrees of freedom removed when estimating the residual deviation.
const DEGREES_OF_FREEDOM_ADJUSTMENT: usize = 2;

/// Error statistics over a borrowed observation pair.
///
/// Every statistic is recomputed from `y` and `y_hat` on each call; nothing is
/// cached.
///
/// # Example
///
/// ```rust,ignore
/// use regression_diagnostics::diagnostics::ErrorCalculator;
/// use faer::Col;
///
/// let y = Col::from_fn(4, |i| (i + 1) as f64);
/// let y_hat = Col::from_fn(4, |i| if i == 0 { -1.0 } else { (i + 1) as f64 });
///
/// let calc = ErrorCalculator::new(&y, &y_hat)?;
/// assert_eq!(calc.get_mse(), 1.0);
/// calc.error_summary();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErrorCalculator<'a> {
    y: &'a Col<f64>,
    y_hat: &'a Col<f64>,
}

impl<'a> ErrorCalculator<'a> {
    /// Validate the observation pair and borrow it.
    ///
    /// # Errors
    /// Returns the first contract violation found by
    /// [`check_for_array_validity`].
    pub fn new(
        y: impl Into<ArrayInput<'a>>,
        y_hat: impl Into<ArrayInput<'a>>,
    ) -> Result<Self, InvalidTypeError> {
        let (y, y_hat) = check_for_array_validity(y.into(), y_hat.into())?;
        debug!("error calculator over {} observations", y.nrows());
        Ok(Self { y, y_hat })
    }

    /// Wrap a pair that has already passed validation.
    pub(crate) fn from_validated(y: &'a Col<f64>, y_hat: &'a Col<f64>) -> Self {
        Self { y, y_hat }
    }

    /// Observed values.
    pub fn y(&self) -> &'a Col<f64> {
        self.y
    }

    /// Predicted values.
    pub fn y_hat(&self) -> &'a Col<f64> {
        self.y_hat
    }

    /// Number of observations.
    pub fn n_observations(&self) -> usize {
        self.y.nrows()
    }

    /// Residuals `y - y_hat`.
    pub fn get_residuals(&self) -> Col<f64> {
        trace!("recomputing residuals");
        Col::from_fn(self.n_observations(), |i| self.y[i] - self.y_hat[i])
    }

    /// Residuals divided by the standard residual deviation.
    ///
    /// When every residual is exactly zero the deviation is zero as well and
    /// an all-zero column is returned instead of NaN.
    pub fn get_standardised_residuals(&self) -> Col<f64> {
        let residuals = self.get_residuals();
        if residuals.iter().all(|&e| e == 0.0) {
            return Col::zeros(residuals.nrows());
        }

        let deviation = self.standard_residual_deviation();
        Col::from_fn(residuals.nrows(), |i| residuals[i] / deviation)
    }

    /// Mean squared error: `Σ e_i² / n`.
    pub fn get_mse(&self) -> f64 {
        let squared = self.squared_residuals();
        squared.iter().sum::<f64>() / squared.nrows() as f64
    }

    /// Root mean squared error.
    pub fn get_rmse(&self) -> f64 {
        self.get_mse().sqrt()
    }

    /// Residual standard error with two degrees of freedom removed:
    /// `sqrt(Σ e_i² / (n - 2))`.
    pub fn standard_residual_deviation(&self) -> f64 {
        let squared = self.squared_residuals();
        let numerator: f64 = squared.iter().sum();
        let denominator = (squared.nrows() - DEGREES_OF_FREEDOM_ADJUSTMENT) as f64;
        (numerator / denominator).sqrt()
    }

    /// Snapshot of the standardized-residual range, MSE and RMSE.
    pub fn summary(&self) -> ErrorSummary {
        let standardised = self.get_standardised_residuals();
        let n = standardised.nrows() as f64;

        ErrorSummary {
            average_standardised_residuals: standardised.iter().sum::<f64>() / n,
            minimum_standardised_residuals: standardised
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min),
            maximum_standardised_residuals: standardised
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max),
            mse: self.get_mse(),
            rmse: self.get_rmse(),
        }
    }

    /// Print the summary to standard output as 4-space indented JSON,
    /// without a trailing newline.
    pub fn error_summary(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = self
            .write_summary(&mut stdout)
            .and_then(|()| stdout.flush())
        {
            warn!("failed to write error summary: {}", err);
        }
    }

    /// Write the summary text printed by [`error_summary`](Self::error_summary).
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.summary())
    }

    fn squared_residuals(&self) -> Col<f64> {
        let residuals = self.get_residuals();
        Col::from_fn(residuals.nrows(), |i| residuals[i] * residuals[i])
    }
}

/// Error statistics reported by [`ErrorCalculator::error_summary`].
///
/// Fields serialize in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorSummary {
    #[serde(rename = "Average Standardised Residuals")]
    pub average_standardised_residuals: f64,
    #[serde(rename = "Minimum Standardised Residuals")]
    pub minimum_standardised_residuals: f64,
    #[serde(rename = "Maximum Standardised Residuals")]
    pub maximum_standardised_residuals: f64,
    #[serde(rename = "MSE")]
    pub mse: f64,
    #[serde(rename = "RMSE")]
    pub rmse: f64,
}

impl fmt::Display for ErrorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}
