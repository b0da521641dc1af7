//! Studentized residuals and outlier flags.

use faer::Col;

/// Compute internally studentized residuals: e_i / (s * sqrt(1 - h_ii))
///
/// These account for the varying variance of residuals due to leverage.
pub fn studentized_residuals(residuals: &Col<f64>, leverage: &Col<f64>, mse: f64) -> Col<f64> {
    let n = residuals.nrows();

    if mse <= 0.0 || !mse.is_finite() {
        return Col::from_fn(n, |_| f64::NAN);
    }

    let s = mse.sqrt();

    Col::from_fn(n, |i| {
        let denominator = s * (1.0 - leverage[i]).max(1e-14).sqrt();
        residuals[i] / denominator
    })
}

/// Compute externally studentized residuals (deleted residuals).
///
/// Uses leave-one-out MSE: e_i / (s_{(i)} * sqrt(1 - h_ii))
/// where s_{(i)} is the standard error computed without observation i.
///
/// These follow a t-distribution with n-p-1 degrees of freedom under null.
pub fn externally_studentized_residuals(
    residuals: &Col<f64>,
    leverage: &Col<f64>,
    mse: f64,
    n_params: usize,
) -> Col<f64> {
    let n = residuals.nrows();
    let df_resid = n.saturating_sub(n_params);

    if df_resid <= 1 || mse <= 0.0 || !mse.is_finite() {
        return Col::from_fn(n, |_| f64::NAN);
    }

    let rss = mse * df_resid as f64;
    let df_loo = (df_resid - 1) as f64;

    Col::from_fn(n, |i| {
        let e_i = residuals[i];
        let one_minus_h = (1.0 - leverage[i]).max(1e-14);

        // RSS_{(i)} = RSS - e_i² / (1 - h_ii)
        let mse_loo = (rss - e_i * e_i / one_minus_h) / df_loo;
        if mse_loo <= 0.0 {
            return f64::NAN;
        }

        e_i / (mse_loo.sqrt() * one_minus_h.sqrt())
    })
}

/// Identify outliers based on studentized residuals.
///
/// Returns indices of observations with |r_i| > threshold.
pub fn residual_outliers(studentized: &Col<f64>, threshold: f64) -> Vec<usize> {
    studentized
        .iter()
        .enumerate()
        .filter(|(_, &r)| r.is_finite() && r.abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}
