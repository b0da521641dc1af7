//! Diagnostics for regression predictions.
//!
//! Given observed values and model predictions this crate computes residual
//! error statistics, validates input shapes, and renders diagnostic figures.
//! A small least-squares fitter supplies the fitted models whose influence
//! (leverage and Cook's distance) can be inspected.
//!
//! # Example
//!
//! ```rust,ignore
//! use regression_diagnostics::prelude::*;
//!
//! let calc = ErrorCalculator::new(&y, &y_hat)?;
//! println!("RMSE = {}", calc.get_rmse());
//! calc.error_summary();
//!
//! Plotter::new(&y, &y_hat)?.plot("Model 1", "residuals.svg")?;
//!
//! let fitted = OlsRegressor::default().fit(&add_constant(&x), &y)?;
//! InfluenceCalculator::new(&fitted)?.show("Model 1", "leverage.svg")?;
//! ```

pub mod core;
pub mod diagnostics;
pub mod plotting;
pub mod solvers;
pub mod utils;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        ArrayInput, FigureStyle, FigureStyleBuilder, InvalidTypeError, LeastSquaresOptions,
        LeastSquaresOptionsBuilder,
    };
    pub use crate::diagnostics::{
        compute_leverage, cooks_distance, high_leverage_points, studentized_residuals,
        ErrorCalculator, ErrorSummary, InfluenceCalculator,
    };
    pub use crate::plotting::{
        DiagnosticPlot, HistogramPlotter, PlotError, Plotter, ScatterPlotter,
    };
    pub use crate::solvers::{
        FittedLeastSquares, OlsRegressor, RegressionError, Regressor, WlsRegressor,
    };
    pub use crate::utils::add_constant;
    pub use crate::validation::{check_for_array_validity, check_model_validity};
}

pub use crate::core::InvalidTypeError;
pub use crate::diagnostics::{ErrorCalculator, InfluenceCalculator};
pub use crate::plotting::{HistogramPlotter, Plotter, ScatterPlotter};
