//! Influence diagnostics of fitted least-squares models.

mod common;

use approx::assert_relative_eq;
use common::{assert_rounded_eq, col, column_design, generate_linear_data, mat};
use regression_diagnostics::prelude::*;
use regression_diagnostics::utils::add_constant;

#[test]
fn test_cooks_distance_without_intercept() {
    let x = column_design(&[1.0, 2.0, 3.0, 4.0]);
    let y = col(&[5.0, 6.0, 7.0, 8.0]);
    let model = OlsRegressor::default().fit(&x, &y).expect("model should fit");

    let calc = InfluenceCalculator::new(&model).expect("fitted model is accepted");
    let (distances, p_values) = calc.cooks_distance();

    assert_rounded_eq(&distances, &[0.07134, 0.08876, 0.0, 1.22449], 5);
    assert_rounded_eq(&p_values, &[0.80670, 0.78520, 1.0, 0.34924], 5);
}

#[test]
fn test_leverage_of_rank_deficient_design() {
    let x = mat(&[
        &[1.0, 2.0, 3.0, 4.0, 5.0],
        &[6.0, 7.0, 8.0, 9.0, 10.0],
        &[11.0, 12.0, 13.0, 14.0, 15.0],
        &[16.0, 17.0, 18.0, 19.0, 20.0],
    ]);
    let y = col(&[5.0, 6.0, 7.0, 8.0]);
    let model = OlsRegressor::default().fit(&x, &y).expect("model should fit");

    assert_eq!(model.rank(), 2);
    let calc = InfluenceCalculator::new(&model).expect("fitted model is accepted");
    assert_rounded_eq(&calc.leverage(), &[0.7, 0.3, 0.3, 0.7], 5);
}

#[test]
fn test_leverage_of_square_design() {
    let x = mat(&[
        &[98.0, 45.0, 765.0],
        &[123.0, 4567.0, 234.0],
        &[567.0, 234.0, 0.0],
    ]);
    let y = col(&[67.0, -21.0, 0.0]);
    let model = OlsRegressor::default().fit(&x, &y).expect("model should fit");

    let calc = InfluenceCalculator::new(&model).expect("fitted model is accepted");
    assert_rounded_eq(&calc.leverage(), &[1.0, 1.0, 1.0], 5);
    assert_eq!(model.df_resid(), 0);
}

#[test]
fn test_leverage_matches_free_function() {
    let (x, y, _) = generate_linear_data(25, 2, 1.0, 0.3, 42);
    let design = add_constant(&x);
    let model = OlsRegressor::default().fit(&design, &y).expect("model should fit");

    let leverage = InfluenceCalculator::new(&model)
        .expect("fitted model is accepted")
        .leverage();
    let expected = compute_leverage(&design, 1e-10);

    for i in 0..25 {
        assert_relative_eq!(leverage[i], expected[i], epsilon = 1e-10);
    }
    let trace: f64 = leverage.iter().sum();
    assert_relative_eq!(trace, 3.0, epsilon = 1e-10);
}

#[test]
fn test_cooks_distance_matches_free_function() {
    let (x, y, _) = generate_linear_data(30, 3, -2.0, 0.5, 7);
    let design = add_constant(&x);
    let model = OlsRegressor::default().fit(&design, &y).expect("model should fit");

    let influence = model.influence();
    let expected = cooks_distance(
        model.residuals(),
        &influence.hat_matrix_diag,
        model.scale(),
        model.n_parameters(),
    );

    let (distances, p_values) = InfluenceCalculator::new(&model)
        .expect("fitted model is accepted")
        .cooks_distance();
    for i in 0..30 {
        assert_relative_eq!(distances[i], expected[i], epsilon = 1e-12);
        assert!((0.0..=1.0).contains(&p_values[i]));
    }
}

#[test]
fn test_weighted_fit_uses_whitened_residuals() {
    let x = add_constant(&column_design(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
    let y = col(&[1.1, 1.9, 3.2, 3.8, 5.3, 5.9]);
    let weights = col(&[1.0, 4.0, 1.0, 4.0, 1.0, 4.0]);

    let model = WlsRegressor::builder()
        .weights(weights.clone())
        .build()
        .fit(&x, &y)
        .expect("model should fit");

    let influence = model.influence();
    let expected = cooks_distance(
        model.whitened_residuals(),
        &influence.hat_matrix_diag,
        model.scale(),
        model.n_parameters(),
    );
    let (distances, _) = InfluenceCalculator::new(&model)
        .expect("fitted model is accepted")
        .cooks_distance();

    for i in 0..6 {
        assert_relative_eq!(
            model.whitened_residuals()[i],
            model.residuals()[i] * weights[i].sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(distances[i], expected[i], epsilon = 1e-12);
    }
}

#[test]
fn test_influence_plot_renders() {
    let (x, y, _) = generate_linear_data(15, 1, 0.5, 0.2, 3);
    let model = OlsRegressor::default()
        .fit(&add_constant(&x), &y)
        .expect("model should fit");

    let style = FigureStyle::builder()
        .size(800, 600)
        .build()
        .expect("style is valid");
    let svg = InfluenceCalculator::new(&model)
        .expect("fitted model is accepted")
        .with_style(style)
        .render_svg("Model 1")
        .expect("rendering should succeed");

    assert!(svg.contains("Model 1"));
    assert!(svg.contains("Leverage Graph"));
    assert!(svg.contains("H Leverage"));
    assert!(svg.contains("Studentized Residuals"));
}
