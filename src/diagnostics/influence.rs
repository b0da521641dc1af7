//! Cook's distance and its significance.

use faer::Col;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// Smallest `1 - h_ii` for which Cook's distance is computed.
const LEVERAGE_EPS: f64 = 1e-14;

/// Compute Cook's distance for each observation.
///
/// Cook's distance measures the influence of each observation on the fitted values.
/// D_i = (e_i² / (p * MSE)) * (h_ii / (1 - h_ii)²)
///
/// Observations with D_i > 4/n or D_i > 1 are typically considered influential.
/// A point with leverage numerically equal to one has no defined distance and
/// gets NaN.
pub fn cooks_distance(
    residuals: &Col<f64>,
    leverage: &Col<f64>,
    mse: f64,
    n_params: usize,
) -> Col<f64> {
    let n = residuals.nrows();

    if mse <= 0.0 || !mse.is_finite() || n_params == 0 {
        return Col::from_fn(n, |_| f64::NAN);
    }

    Col::from_fn(n, |i| {
        let e_i = residuals[i];
        let h_ii = leverage[i];
        let one_minus_h = 1.0 - h_ii;
        if one_minus_h < LEVERAGE_EPS {
            return f64::NAN;
        }

        let d_i = (e_i * e_i / (n_params as f64 * mse)) * (h_ii / (one_minus_h * one_minus_h));

        if d_i.is_finite() {
            d_i.max(0.0)
        } else {
            f64::NAN
        }
    })
}

/// Upper-tail probability of each Cook's distance under F(p, n - p).
///
/// Returns NaN wherever the distance is not finite or the distribution is
/// undefined (no residual degrees of freedom).
pub fn cooks_p_values(cooks_d: &Col<f64>, n_params: usize, df_resid: usize) -> Col<f64> {
    let n = cooks_d.nrows();

    let dist = if n_params > 0 && df_resid > 0 {
        FisherSnedecor::new(n_params as f64, df_resid as f64).ok()
    } else {
        None
    };

    match dist {
        Some(f) => Col::from_fn(n, |i| {
            let d = cooks_d[i];
            if d.is_finite() {
                f.sf(d)
            } else {
                f64::NAN
            }
        }),
        None => Col::from_fn(n, |_| f64::NAN),
    }
}
