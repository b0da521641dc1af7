//! Least-squares estimators producing a fitted model with influence diagnostics.

mod fitted;
mod ols;
mod traits;
mod wls;

pub use fitted::{FittedLeastSquares, Influence};
pub use ols::{OlsRegressor, OlsRegressorBuilder};
pub use traits::{RegressionError, Regressor};
pub use wls::{WlsRegressor, WlsRegressorBuilder};
