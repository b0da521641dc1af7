//! Contract-violation errors raised while validating calculator inputs.

use std::fmt;
use thiserror::Error;

/// The property an argument failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The argument must be a native numeric array, not a plain sequence.
    NumericArray,
    /// The argument must have exactly one dimension.
    OneDimension,
    /// Both arguments must hold the same number of observations.
    EqualObservations,
    /// Both arguments must hold more than two observations.
    MoreThanTwoValues,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Requirement::NumericArray => "numpy array",
            Requirement::OneDimension => "1 dimension",
            Requirement::EqualObservations => "equal observations",
            Requirement::MoreThanTwoValues => "more than 2 values",
        };
        f.write_str(text)
    }
}

/// The argument (or pair of arguments) a requirement was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Observed values.
    Y,
    /// Predicted values.
    YHat,
    /// Observed and predicted values considered jointly.
    Both,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Parameter::Y => "y",
            Parameter::YHat => "y_hat",
            Parameter::Both => "y & y_hat",
        };
        f.write_str(text)
    }
}

/// A type or shape contract violation.
///
/// Raised only while constructing a calculator or plotter. Once construction
/// succeeds none of the instance's methods can fail with this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidTypeError {
    #[error("expected a {requirement} for the parameter {parameter}")]
    Parameter {
        requirement: Requirement,
        parameter: Parameter,
    },

    #[error("expected a fitted model from the regression library")]
    Model,
}

impl InvalidTypeError {
    pub(crate) fn parameter(requirement: Requirement, parameter: Parameter) -> Self {
        InvalidTypeError::Parameter {
            requirement,
            parameter,
        }
    }

    /// The unmet requirement, if this error concerns an observation argument.
    pub fn requirement(&self) -> Option<Requirement> {
        match self {
            InvalidTypeError::Parameter { requirement, .. } => Some(*requirement),
            InvalidTypeError::Model => None,
        }
    }
}
