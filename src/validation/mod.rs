//! Input validation for calculators and plotters.
//!
//! Checks run in a fixed order and the first failure is returned:
//!
//! 1. `y` is a numeric array
//! 2. `y_hat` is a numeric array
//! 3. `y` is one-dimensional
//! 4. `y_hat` is one-dimensional
//! 5. both hold the same number of observations
//! 6. both hold more than two observations

use std::any::Any;

use crate::core::{ArrayInput, InvalidTypeError, Parameter, Requirement};
use crate::solvers::FittedLeastSquares;
use faer::Col;
use log::debug;

/// Fewest observations leaving residual degrees of freedom after removing two.
pub const MIN_OBSERVATIONS: usize = 3;

/// Validate an observation pair and return the underlying columns.
///
/// # Errors
/// Returns `InvalidTypeError::Parameter` naming the first unmet requirement
/// and the offending parameter (or `y & y_hat` for joint checks).
pub fn check_for_array_validity<'a>(
    y: ArrayInput<'a>,
    y_hat: ArrayInput<'a>,
) -> Result<(&'a Col<f64>, &'a Col<f64>), InvalidTypeError> {
    check_array_type(&y, Parameter::Y)?;
    check_array_type(&y_hat, Parameter::YHat)?;
    let y = check_dimensions(y, Parameter::Y)?;
    let y_hat = check_dimensions(y_hat, Parameter::YHat)?;
    check_for_equal_observation_count(y, y_hat)?;
    check_for_more_than_two_entries(y, y_hat)?;
    Ok((y, y_hat))
}

/// Validate that `model` is exactly a fitted least-squares model.
///
/// The check is by type identity; wrappers or look-alike types are rejected.
pub fn check_model_validity(model: &dyn Any) -> Result<&FittedLeastSquares, InvalidTypeError> {
    model.downcast_ref::<FittedLeastSquares>().ok_or_else(|| {
        debug!("rejected model argument: not a fitted least-squares model");
        InvalidTypeError::Model
    })
}

fn reject(requirement: Requirement, parameter: Parameter) -> InvalidTypeError {
    let err = InvalidTypeError::parameter(requirement, parameter);
    debug!("rejected observation input: {err}");
    err
}

fn check_array_type(input: &ArrayInput<'_>, parameter: Parameter) -> Result<(), InvalidTypeError> {
    match input {
        ArrayInput::Sequence(_) => Err(reject(Requirement::NumericArray, parameter)),
        ArrayInput::Column(_) | ArrayInput::Matrix(_) => Ok(()),
    }
}

fn check_dimensions<'a>(
    input: ArrayInput<'a>,
    parameter: Parameter,
) -> Result<&'a Col<f64>, InvalidTypeError> {
    match input {
        ArrayInput::Column(col) => Ok(col),
        ArrayInput::Matrix(_) | ArrayInput::Sequence(_) => {
            Err(reject(Requirement::OneDimension, parameter))
        }
    }
}

fn check_for_equal_observation_count(
    y: &Col<f64>,
    y_hat: &Col<f64>,
) -> Result<(), InvalidTypeError> {
    if y.nrows() != y_hat.nrows() {
        return Err(reject(Requirement::EqualObservations, Parameter::Both));
    }
    Ok(())
}

fn check_for_more_than_two_entries(
    y: &Col<f64>,
    y_hat: &Col<f64>,
) -> Result<(), InvalidTypeError> {
    if y.nrows() < MIN_OBSERVATIONS || y_hat.nrows() < MIN_OBSERVATIONS {
        return Err(reject(Requirement::MoreThanTwoValues, Parameter::Both));
    }
    Ok(())
}
