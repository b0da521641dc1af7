//! Least-squares fitting options.

use thiserror::Error;

/// Configuration options for least-squares fitting.
#[derive(Debug, Clone)]
pub struct LeastSquaresOptions {
    /// Relative tolerance below which a column is treated as linearly
    /// dependent on the columns before it (default: 1e-10).
    pub rank_tolerance: f64,
    /// Significance level used to flag large residuals in influence plots
    /// (default: 0.05).
    pub alpha: f64,
}

impl Default for LeastSquaresOptions {
    fn default() -> Self {
        Self {
            rank_tolerance: 1e-10,
            alpha: 0.05,
        }
    }
}

/// Errors that can occur when validating fitting options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("rank_tolerance must be positive and finite, got {0}")]
    InvalidRankTolerance(f64),
    #[error("alpha must be in (0, 1), got {0}")]
    InvalidAlpha(f64),
}

impl LeastSquaresOptions {
    /// Create a new builder for fitting options.
    pub fn builder() -> LeastSquaresOptionsBuilder {
        LeastSquaresOptionsBuilder::default()
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.rank_tolerance.is_finite() && self.rank_tolerance > 0.0) {
            return Err(OptionsError::InvalidRankTolerance(self.rank_tolerance));
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(OptionsError::InvalidAlpha(self.alpha));
        }
        Ok(())
    }
}

/// Builder for `LeastSquaresOptions`.
#[derive(Debug, Clone, Default)]
pub struct LeastSquaresOptionsBuilder {
    options: LeastSquaresOptions,
}

impl LeastSquaresOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rank tolerance.
    pub fn rank_tolerance(mut self, tol: f64) -> Self {
        self.options.rank_tolerance = tol;
        self
    }

    /// Set the significance level for outlier flags.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.options.alpha = alpha;
        self
    }

    /// Build the options, validating all parameters.
    pub fn build(self) -> Result<LeastSquaresOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build the options without validation.
    pub fn build_unchecked(self) -> LeastSquaresOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = LeastSquaresOptions::default();
        assert!((opts.rank_tolerance - 1e-10).abs() < 1e-20);
        assert!((opts.alpha - 0.05).abs() < 1e-12);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_builder_rank_tolerance() {
        let opts = LeastSquaresOptions::builder()
            .rank_tolerance(1e-8)
            .build()
            .expect("options should be valid");
        assert!((opts.rank_tolerance - 1e-8).abs() < 1e-14);
    }

    #[test]
    fn test_validation_invalid_rank_tolerance() {
        let result = LeastSquaresOptions::builder().rank_tolerance(0.0).build();
        assert!(matches!(result, Err(OptionsError::InvalidRankTolerance(_))));

        let result = LeastSquaresOptions::builder()
            .rank_tolerance(f64::NAN)
            .build();
        assert!(matches!(result, Err(OptionsError::InvalidRankTolerance(_))));
    }

    #[test]
    fn test_validation_invalid_alpha() {
        let result = LeastSquaresOptions::builder().alpha(1.0).build();
        assert!(matches!(result, Err(OptionsError::InvalidAlpha(_))));
    }
}
