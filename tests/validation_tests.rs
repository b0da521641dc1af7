//! Input contract checks shared by every calculator and plotter.

mod common;

use std::collections::{HashMap, HashSet};

use common::{col, column_design, mat};
use faer::{Col, Mat};
use regression_diagnostics::prelude::*;
use regression_diagnostics::core::{Parameter, Requirement};

fn message_of(result: Result<ErrorCalculator<'_>, InvalidTypeError>) -> String {
    result.expect_err("construction should fail").to_string()
}

#[test]
fn test_plain_sequence_names_y() {
    let y_hat = col(&[1.0]);
    let msg = message_of(ErrorCalculator::new(&vec![0.0_f64], &y_hat));
    assert_eq!(msg, "expected a numpy array for the parameter y");
}

#[test]
fn test_plain_sequence_names_y_hat() {
    let y = col(&[2.0]);
    let msg = message_of(ErrorCalculator::new(&y, &[3.0_f64]));
    assert_eq!(msg, "expected a numpy array for the parameter y_hat");
}

#[test]
fn test_matrix_names_y() {
    let y = mat(&[&[4.0], &[5.0]]);
    let y_hat = col(&[6.0]);
    let msg = message_of(ErrorCalculator::new(&y, &y_hat));
    assert_eq!(msg, "expected a 1 dimension for the parameter y");
}

#[test]
fn test_matrix_names_y_hat() {
    let y = col(&[7.0]);
    let y_hat = mat(&[&[8.0], &[9.0]]);
    let msg = message_of(ErrorCalculator::new(&y, &y_hat));
    assert_eq!(msg, "expected a 1 dimension for the parameter y_hat");
}

#[test]
fn test_unequal_sizes() {
    for (y, y_hat) in [
        (col(&[10.0, 11.0]), col(&[12.0])),
        (col(&[13.0]), col(&[14.0, 15.0])),
    ] {
        let msg = message_of(ErrorCalculator::new(&y, &y_hat));
        assert_eq!(msg, "expected a equal observations for the parameter y & y_hat");
    }
}

#[test]
fn test_too_few_values() {
    for (y, y_hat) in [
        (Col::<f64>::zeros(0), Col::<f64>::zeros(0)),
        (col(&[1.0]), col(&[1.0])),
        (col(&[1.0, 2.0]), col(&[1.0, 2.0])),
    ] {
        let err = ErrorCalculator::new(&y, &y_hat).expect_err("too few values");
        assert_eq!(
            err,
            InvalidTypeError::Parameter {
                requirement: Requirement::MoreThanTwoValues,
                parameter: Parameter::Both,
            }
        );
        assert!(err.to_string().contains("more than 2 values"));
    }
}

#[test]
fn test_three_values_accepted() {
    let y = col(&[1.0, 2.0, 3.0]);
    let y_hat = col(&[1.0, 2.0, 2.5]);
    assert!(ErrorCalculator::new(&y, &y_hat).is_ok());
    assert!(check_for_array_validity((&y).into(), (&y_hat).into()).is_ok());
}

#[test]
fn test_plotters_share_the_contract() {
    let y = column_design(&[1.0, 2.0, 3.0]);
    let y_hat = col(&[1.0, 2.0, 3.0]);

    let err = Plotter::new(&y, &y_hat).expect_err("matrix is not 1-D");
    assert_eq!(err.to_string(), "expected a 1 dimension for the parameter y");

    let err = ScatterPlotter::new(&y_hat, &[1.0_f64, 2.0, 3.0]).expect_err("slice is not an array");
    assert_eq!(err.to_string(), "expected a numpy array for the parameter y_hat");
}

#[test]
fn test_fitted_least_squares_models_accepted() {
    let x = column_design(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let y = col(&[6.0, 7.0, 8.0, 9.0, 10.0]);

    let ols = OlsRegressor::default().fit(&x, &y).expect("OLS should fit");
    assert!(InfluenceCalculator::new(&ols).is_ok());

    let wls = WlsRegressor::builder()
        .weights(col(&[1.0, 2.0, 1.0, 2.0, 1.0]))
        .build()
        .fit(&x, &y)
        .expect("WLS should fit");
    assert!(InfluenceCalculator::new(&wls).is_ok());
}

#[test]
fn test_non_models_rejected() {
    let list = vec![1, 2, 3];
    let set: HashSet<i32> = [4, 5, 6].into_iter().collect();
    let map: HashMap<i32, i32> = [(7, 8), (9, 10), (11, 12)].into_iter().collect();
    let tuple = (13,);
    let unfitted = OlsRegressor::default();
    let raw = Mat::<f64>::zeros(2, 2);

    assert_eq!(check_model_validity(&list).err(), Some(InvalidTypeError::Model));
    assert_eq!(check_model_validity(&set).err(), Some(InvalidTypeError::Model));
    assert_eq!(check_model_validity(&map).err(), Some(InvalidTypeError::Model));
    assert_eq!(check_model_validity(&tuple).err(), Some(InvalidTypeError::Model));
    assert_eq!(check_model_validity(&unfitted).err(), Some(InvalidTypeError::Model));
    assert_eq!(check_model_validity(&raw).err(), Some(InvalidTypeError::Model));

    let err = InfluenceCalculator::new(&list).expect_err("list is not a model");
    assert!(err.to_string().contains("fitted model"));
}
