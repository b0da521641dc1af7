//! # Salary Model Diagnostics
//!
//! Fits three competing salary models and compares their residual error
//! statistics, residual plots and leverage graphs.
//!
//! ## Models
//! - Model 1: experience, years at rank, market value, degree
//! - Model 2: Model 1 without years at rank
//! - Model 3: years in field, executive position, market value, engineering
//!
//! Figures are written to the system temporary directory.
//!
//! Run with: `cargo run --example salary_diagnostics`

use std::error::Error;

use faer::{Col, Mat};
use regression_diagnostics::prelude::*;

const N_EMPLOYEES: usize = 120;

struct Employees {
    prior_experience: Vec<f64>,
    years_in_field: Vec<f64>,
    years_at_rank: Vec<f64>,
    market_value: Vec<f64>,
    has_degree: Vec<f64>,
    executive_position: Vec<f64>,
    engineering_department: Vec<f64>,
    salary: Col<f64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Salary Model Diagnostics ===\n");

    let employees = generate_employees(N_EMPLOYEES, 2024);
    let models = [
        (
            "Model 1",
            design(&[
                &employees.prior_experience,
                &employees.years_at_rank,
                &employees.market_value,
                &employees.has_degree,
            ]),
        ),
        (
            "Model 2",
            design(&[
                &employees.prior_experience,
                &employees.market_value,
                &employees.has_degree,
            ]),
        ),
        (
            "Model 3",
            design(&[
                &employees.years_in_field,
                &employees.executive_position,
                &employees.market_value,
                &employees.engineering_department,
            ]),
        ),
    ];

    let out_dir = std::env::temp_dir();
    for (name, x) in &models {
        let fitted = OlsRegressor::default().fit(x, &employees.salary)?;
        let y_hat = fitted.fitted_values().clone();

        println!("--- {} ---", name);
        let calc = ErrorCalculator::new(&employees.salary, &y_hat)?;
        calc.error_summary();
        println!();

        let slug = name.to_lowercase().replace(' ', "_");
        Plotter::new(&employees.salary, &y_hat)?
            .plot(name, out_dir.join(format!("{}_histogram.svg", slug)))?;
        ScatterPlotter::new(&employees.salary, &y_hat)?
            .plot(name, out_dir.join(format!("{}_scatter.svg", slug)))?;

        let influence = InfluenceCalculator::new(&fitted)?;
        influence.show(name, out_dir.join(format!("{}_leverage.svg", slug)))?;

        let (distances, _) = influence.cooks_distance();
        let high = high_leverage_points(&influence.leverage(), fitted.rank(), None);
        let most_influential = distances
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_finite())
            .max_by(|a, b| a.1.total_cmp(b.1));

        println!("High leverage employees: {:?}", high);
        if let Some((i, d)) = most_influential {
            println!("Largest Cook's distance: employee {} ({:.4})", i, d);
        }
        println!();
    }

    println!("Figures written to {}", out_dir.display());
    Ok(())
}

/// Design matrix with an intercept column followed by `features`.
fn design(features: &[&Vec<f64>]) -> Mat<f64> {
    let n = features.first().map_or(0, |f| f.len());
    let x = Mat::from_fn(n, features.len(), |i, j| features[j][i]);
    add_constant(&x)
}

/// Synthetic salary survey with log-scaled experience measures.
fn generate_employees(n: usize, seed: u64) -> Employees {
    let mut state = seed;
    let mut next_rand = move || -> f64 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((state >> 33) as f64) / (u32::MAX as f64)
    };

    let mut employees = Employees {
        prior_experience: Vec::with_capacity(n),
        years_in_field: Vec::with_capacity(n),
        years_at_rank: Vec::with_capacity(n),
        market_value: Vec::with_capacity(n),
        has_degree: Vec::with_capacity(n),
        executive_position: Vec::with_capacity(n),
        engineering_department: Vec::with_capacity(n),
        salary: Col::zeros(n),
    };

    for i in 0..n {
        let prior = (next_rand() * 10.0).floor();
        let field = prior + (next_rand() * 25.0).floor();
        let rank = (field * next_rand()).floor();
        let market = 0.7 + 0.6 * next_rand();
        let degree = if next_rand() < 0.8 { 1.0 } else { 0.0 };
        let executive = if next_rand() < 0.15 { 1.0 } else { 0.0 };
        let engineering = if next_rand() < 0.3 { 1.0 } else { 0.0 };
        let noise = (next_rand() - 0.5) * 6_000.0;

        employees.salary[i] = 30_000.0
            + 400.0 * prior
            + 900.0 * field
            + 600.0 * rank
            + 20_000.0 * market
            + 3_000.0 * degree
            + 12_000.0 * executive
            + 2_500.0 * engineering
            + noise;

        employees.prior_experience.push((prior + 0.001).ln());
        employees.years_in_field.push((field + 0.001).ln());
        employees.years_at_rank.push((rank + 0.001).ln());
        employees.market_value.push(market);
        employees.has_degree.push(degree);
        employees.executive_position.push(executive);
        employees.engineering_department.push(engineering);
    }

    employees
}
