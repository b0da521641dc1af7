//! Leverage (hat matrix diagonal) calculations.

use crate::utils::{detect_aliased_columns, select_columns};
use faer::{Col, Mat};

/// Leverage from an orthonormal basis of the design's column space.
///
/// `h_ii` is the squared norm of row `i` of the first `rank` columns of `q`.
pub(crate) fn leverage_from_basis(q: &Mat<f64>, rank: usize) -> Col<f64> {
    Col::from_fn(q.nrows(), |i| {
        (0..rank)
            .map(|j| q[(i, j)] * q[(i, j)])
            .sum::<f64>()
            .clamp(0.0, 1.0)
    })
}

/// Compute leverage values (diagonal of hat matrix H = X(X'X)⁻X').
///
/// The design is used as given. Linearly dependent columns are dropped before
/// the projection is formed, so rank-deficient and wide designs are handled.
///
/// # Properties
/// - h_ii ∈ [0, 1]
/// - Σ h_ii = rank of X
/// - Points with h_ii > 2p/n are considered high leverage
pub fn compute_leverage(x: &Mat<f64>, rank_tolerance: f64) -> Col<f64> {
    let aliased = detect_aliased_columns(x, rank_tolerance);
    let rank = aliased.iter().filter(|&&a| !a).count();

    if rank == 0 {
        return Col::zeros(x.nrows());
    }

    let design = select_columns(x, &aliased);
    let q = design.qr().compute_Q();
    leverage_from_basis(&q, rank)
}

/// Identify high leverage points.
///
/// Returns indices of observations with leverage > threshold.
/// Default threshold is 2p/n where p is number of parameters.
pub fn high_leverage_points(
    leverage: &Col<f64>,
    n_params: usize,
    threshold: Option<f64>,
) -> Vec<usize> {
    let n = leverage.nrows();
    let cutoff = threshold.unwrap_or(2.0 * n_params as f64 / n as f64);

    leverage
        .iter()
        .enumerate()
        .filter(|(_, &h)| h > cutoff)
        .map(|(i, _)| i)
        .collect()
}
