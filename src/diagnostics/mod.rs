//! Residual, leverage and influence diagnostics.
//!
//! - [`ErrorCalculator`]: residual-based error statistics of an observation pair
//! - [`InfluenceCalculator`]: Cook's distance and leverage of a fitted model
//! - free functions for studentized residuals, leverage and Cook's distance
//!
//! # Example
//!
//! ```rust,ignore
//! use regression_diagnostics::diagnostics::{ErrorCalculator, InfluenceCalculator};
//!
//! let calc = ErrorCalculator::new(&y, &y_hat)?;
//! calc.error_summary();
//!
//! let fitted = OlsRegressor::default().fit(&x, &y)?;
//! let (distances, p_values) = InfluenceCalculator::new(&fitted)?.cooks_distance();
//! ```

mod error_calculator;
mod influence;
mod influence_calculator;
pub(crate) mod leverage;
mod residuals;

pub use error_calculator::{ErrorCalculator, ErrorSummary};
pub use influence::{cooks_distance, cooks_p_values};
pub use influence_calculator::InfluenceCalculator;
pub use leverage::{compute_leverage, high_leverage_points};
pub use residuals::{externally_studentized_residuals, residual_outliers, studentized_residuals};
